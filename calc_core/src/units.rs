//! # Angle Units
//!
//! Type-safe wrappers for angles. The solver works in radians internally
//! (that is what `f64::asin` and friends return) and reports degrees, so
//! keeping the two apart at the type level avoids the classic "forgot to
//! convert" bug.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Degrees, Radians};
//!
//! let right = Degrees(90.0);
//! let rad: Radians = right.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg: Degrees = Radians(std::f64::consts::FRAC_PI_4).into();
        assert!((deg.0 - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(36.87);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "36.87");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(deg, roundtrip);
    }
}
