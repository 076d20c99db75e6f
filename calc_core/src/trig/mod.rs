//! # Trigonometry
//!
//! Right-triangle solving (SOH-CAH-TOA) and trig ratio tables.
//!
//! - [`solver`] - pick the rule from the known sides and compute θ
//! - [`ratios`] - sin, cos, tan and their reciprocals for an angle
//! - [`practice`] - fixed drill problems with answer checking

pub mod practice;
pub mod ratios;
pub mod solver;

pub use practice::{PracticeProblem, PRACTICE_PROBLEMS};
pub use ratios::{all_trig_values, TrigTable, TrigValues};
pub use solver::{solve, solve_sides, PythagoreanCheck, SolveResult, SolveRule, TriangleSides};
