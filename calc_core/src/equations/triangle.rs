//! # Right-Triangle Formulas
//!
//! SOH-CAH-TOA and the Pythagorean relation for a right triangle, with the
//! unknown angle θ opposite the "opposite" side.
//!
//! ```text
//!            ╱│
//!     hyp  ╱  │ opp
//!        ╱ θ  │
//!       ───────┘
//!         adj
//! ```
//!
//! ## Notation
//!
//! - `o` = Opposite side (across from θ)
//! - `a` = Adjacent side (touching θ, not the hypotenuse)
//! - `h` = Hypotenuse (across from the right angle)
//!
//! These functions do no domain checking: callers validate that ratios fall
//! inside the inverse function's domain before calling.

use crate::units::{Degrees, Radians};

/// Angle from opposite and hypotenuse (SOH)
///
/// # Formula
/// θ = sin⁻¹(o / h)
///
/// # Example
/// ```rust
/// use calc_core::equations::triangle::sine_angle;
///
/// let theta = sine_angle(3.0, 5.0);
/// assert!((theta.0 - 36.8699).abs() < 1e-4);
/// ```
#[inline]
pub fn sine_angle(o: f64, h: f64) -> Degrees {
    Radians((o / h).asin()).into()
}

/// Angle from adjacent and hypotenuse (CAH)
///
/// # Formula
/// θ = cos⁻¹(a / h)
#[inline]
pub fn cosine_angle(a: f64, h: f64) -> Degrees {
    Radians((a / h).acos()).into()
}

/// Angle from opposite and adjacent (TOA)
///
/// # Formula
/// θ = tan⁻¹(o / a)
///
/// Evaluated as `atan2(o, a)`, which stays finite when `o / a` overflows.
///
/// # Example
/// ```rust
/// use calc_core::equations::triangle::tangent_angle;
///
/// assert!((tangent_angle(7.0, 7.0).0 - 45.0).abs() < 1e-12);
/// ```
#[inline]
pub fn tangent_angle(o: f64, a: f64) -> Degrees {
    Radians(o.atan2(a)).into()
}

/// Hypotenuse predicted from the two legs
///
/// # Formula
/// h = √(o² + a²)
///
/// Uses `hypot` to avoid overflow for very large legs.
#[inline]
pub fn pythagorean_hypotenuse(o: f64, a: f64) -> f64 {
    o.hypot(a)
}

/// Whether h = √(o² + a²) holds within a relative tolerance
///
/// Compares lengths rather than squares so sides near `f64::MAX` don't
/// overflow.
#[inline]
pub fn satisfies_pythagoras(o: f64, a: f64, h: f64, relative_tolerance: f64) -> bool {
    let predicted = pythagorean_hypotenuse(o, a);
    (h - predicted).abs() <= relative_tolerance * h.abs().max(predicted)
}
