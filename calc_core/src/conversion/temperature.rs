//! Affine temperature conversions.
//!
//! Temperature scales do not share an origin, so they cannot go through the
//! multiplicative scale table. Every conversion passes through Celsius.

use serde::{Deserialize, Serialize};

/// Absolute zero offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Convert a reading on `scale` to Celsius.
///
/// # Example
/// ```
/// use calc_core::conversion::temperature::{to_celsius, TemperatureScale};
///
/// assert_eq!(to_celsius(212.0, TemperatureScale::Fahrenheit), 100.0);
/// ```
#[inline]
pub fn to_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - KELVIN_OFFSET,
    }
}

/// Convert a Celsius reading to `scale`.
#[inline]
pub fn from_celsius(celsius: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
    }
}
