//! The six trigonometric ratios of an angle.
//!
//! `sin` and `cos` are always defined. `tan`, `csc`, `sec` and `cot` divide by
//! one of them and are undefined where that denominator is zero; those
//! accessors return `UndefinedValue` instead of an infinity.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Radians};

/// Magnitude below which a denominator counts as zero.
///
/// `cos(90°)` evaluates to ~6.1e-17 in floating point, not 0.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Trig ratios of one angle.
///
/// # Example
/// ```
/// use calc_core::trig::all_trig_values;
///
/// let values = all_trig_values(0.0).unwrap();
/// assert_eq!(values.sin(), 0.0);
/// assert_eq!(values.cos(), 1.0);
/// assert!(values.cot().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigValues {
    angle: Degrees,
    sin: f64,
    cos: f64,
}

/// Compute the trig ratios of an angle given in degrees.
///
/// # Errors
///
/// * `InvalidInput` - the angle is NaN or infinite
pub fn all_trig_values(angle_degrees: f64) -> CalcResult<TrigValues> {
    if !angle_degrees.is_finite() {
        return Err(CalcError::invalid_input(
            "angle_degrees",
            angle_degrees.to_string(),
            "Angle must be a finite number",
        ));
    }
    let angle = Degrees(angle_degrees);
    let rad: Radians = angle.into();
    let (sin, cos) = rad.0.sin_cos();
    trace!(angle_degrees, sin, cos, "computed trig ratios");
    Ok(TrigValues { angle, sin, cos })
}

impl TrigValues {
    pub fn angle(&self) -> Degrees {
        self.angle
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// sin / cos
    pub fn tan(&self) -> CalcResult<f64> {
        Ok(self.sin / self.nonzero("tan", self.cos)?)
    }

    /// 1 / sin
    pub fn csc(&self) -> CalcResult<f64> {
        Ok(1.0 / self.nonzero("csc", self.sin)?)
    }

    /// 1 / cos
    pub fn sec(&self) -> CalcResult<f64> {
        Ok(1.0 / self.nonzero("sec", self.cos)?)
    }

    /// cos / sin (equal to 1 / tan, but finite at 90°)
    pub fn cot(&self) -> CalcResult<f64> {
        Ok(self.cos / self.nonzero("cot", self.sin)?)
    }

    fn nonzero(&self, function: &str, denominator: f64) -> CalcResult<f64> {
        if denominator.abs() < ZERO_TOLERANCE {
            Err(CalcError::undefined_value(function, self.angle.0))
        } else {
            Ok(denominator)
        }
    }

    /// Serializable snapshot with undefined ratios as `null`
    pub fn to_table(&self) -> TrigTable {
        TrigTable {
            angle_degrees: self.angle.0,
            sin: self.sin,
            cos: self.cos,
            tan: self.tan().ok(),
            csc: self.csc().ok(),
            sec: self.sec().ok(),
            cot: self.cot().ok(),
        }
    }
}

/// JSON form of [`TrigValues`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrigTable {
    pub angle_degrees: f64,
    pub sin: f64,
    pub cos: f64,
    pub tan: Option<f64>,
    pub csc: Option<f64>,
    pub sec: Option<f64>,
    pub cot: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_degrees() {
        let values = all_trig_values(0.0).unwrap();
        assert_eq!(values.tan().unwrap(), 0.0);
        assert_eq!(values.sec().unwrap(), 1.0);
        assert_eq!(values.cot().unwrap_err(), CalcError::undefined_value("cot", 0.0));
        assert_eq!(values.csc().unwrap_err().error_code(), "UNDEFINED_VALUE");
    }

    #[test]
    fn test_ninety_degrees() {
        let values = all_trig_values(90.0).unwrap();
        assert_relative_eq!(values.sin(), 1.0);
        assert!(values.tan().is_err());
        assert!(values.sec().is_err());
        assert_relative_eq!(values.csc().unwrap(), 1.0);
        assert!(values.cot().unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_thirty_degrees() {
        let values = all_trig_values(30.0).unwrap();
        assert_relative_eq!(values.sin(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(values.csc().unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(values.sec().unwrap(), 2.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(values.cot().unwrap(), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_angle() {
        assert!(all_trig_values(f64::NAN).is_err());
    }

    #[test]
    fn test_table_nulls() {
        let table = all_trig_values(0.0).unwrap().to_table();
        assert_eq!(table.cot, None);
        assert_eq!(table.csc, None);
        let json = serde_json::to_value(table).unwrap();
        assert!(json["cot"].is_null());
        assert_eq!(json["angleDegrees"], 0.0);
    }
}
