//! # Trigonometry Equations
//!
//! Fundamental formulas used by the solvers, kept in one place so each can be
//! checked against a textbook independently of the solver's branching.
//!
//! ## Modules
//!
//! - [`triangle`] - SOH-CAH-TOA inverse formulas and the Pythagorean relation

pub mod triangle;

pub use triangle::{
    cosine_angle,
    pythagorean_hypotenuse,
    satisfies_pythagoras,
    sine_angle,
    tangent_angle,
};
