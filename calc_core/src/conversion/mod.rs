//! # Unit Conversion
//!
//! Converts a value between two units of the same category. Linear categories
//! (length, weight, time, speed, area) go through the category's base unit:
//! `base = value * scale[from]`, then `base / scale[to]`. Temperature is
//! affine and goes through Celsius instead (see [`temperature`]).
//!
//! No rounding is applied; use [`format_value`] for display.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::conversion::convert;
//!
//! let km = convert("length", "meters", "kilometers", 1000.0).unwrap();
//! assert_eq!(km, 1.0);
//!
//! let f = convert("temperature", "celsius", "fahrenheit", 100.0).unwrap();
//! assert_eq!(f, 212.0);
//!
//! assert!(convert("volume", "liters", "gallons", 1.0).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Unit table (ids, names, symbols, scale factors)
//! - [`temperature`] - Affine temperature formulas
//! - [`currency`] - Currency conversion over a caller-supplied rate table
//! - [`history`] - Bounded, newest-first log of performed conversions

pub mod catalog;
pub mod currency;
pub mod history;
pub mod temperature;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};

pub use catalog::{Unit, UnitKind};
pub use currency::{convert_currency, Currency, ExchangeRates};
pub use history::{ConversionHistory, ConversionRecord};
pub use temperature::TemperatureScale;

/// Conversion category. Every unit belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Time,
    Speed,
    Area,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Area,
    ];

    /// Stable id used in requests and JSON
    pub fn id(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Time => "time",
            Category::Speed => "speed",
            Category::Area => "area",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Area => "Area",
        }
    }

    /// Units of this category, base unit first
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => &Unit::LENGTH,
            Category::Weight => &Unit::WEIGHT,
            Category::Temperature => &Unit::TEMPERATURE,
            Category::Time => &Unit::TIME,
            Category::Speed => &Unit::SPEED,
            Category::Area => &Unit::AREA,
        }
    }

    /// The reference unit every other unit is expressed against
    pub fn base_unit(&self) -> Unit {
        self.units()[0]
    }

    /// The (from, to) pair preselected when a user switches to this category
    pub fn default_pair(&self) -> (Unit, Unit) {
        let units = self.units();
        (units[0], units[1])
    }

    /// Whether conversions in this category need an offset as well as a scale
    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }

    /// Resolve a unit id within this category.
    ///
    /// A valid unit id from a different category is still `UnknownUnit`.
    pub fn unit(&self, id: &str) -> CalcResult<Unit> {
        self.units()
            .iter()
            .copied()
            .find(|u| u.id() == id)
            .ok_or_else(|| CalcError::unknown_unit(self.id(), id))
    }

    /// Convert `value` between two units of this category.
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> CalcResult<f64> {
        for unit in [from, to] {
            if unit.category() != *self {
                return Err(CalcError::unknown_unit(self.id(), unit.id()));
            }
        }
        convert_units(value, from, to)
    }
}

impl FromStr for Category {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| CalcError::unknown_category(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Convert a value given category and unit ids.
///
/// # Errors
///
/// * `UnknownCategory` - `category` is not one of the six category ids
/// * `UnknownUnit` - either unit id is not part of `category`
/// * `InvalidInput` - `value` is NaN or infinite, or the result overflows
///   `f64` (e.g. 1e300 km² in cm²)
pub fn convert(category: &str, from_unit: &str, to_unit: &str, value: f64) -> CalcResult<f64> {
    let category: Category = category.parse().map_err(|e| {
        warn!(category, "rejected conversion: unknown category");
        e
    })?;
    let from = category.unit(from_unit)?;
    let to = category.unit(to_unit)?;
    category.convert(value, from, to)
}

/// Convert a value between two typed units.
///
/// Converting a unit to itself returns `value` unchanged, bit for bit.
pub fn convert_units(value: f64, from: Unit, to: Unit) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            value.to_string(),
            "Value must be a finite number",
        ));
    }

    let category = from.category();
    if to.category() != category {
        return Err(CalcError::unknown_unit(category.id(), to.id()));
    }

    if from == to {
        return Ok(value);
    }

    let result = match (from.kind(), to.kind()) {
        (UnitKind::Linear(from_scale), UnitKind::Linear(to_scale)) => {
            let base = value * from_scale;
            base / to_scale
        }
        (UnitKind::Affine(from_scale), UnitKind::Affine(to_scale)) => {
            let celsius = temperature::to_celsius(value, from_scale);
            temperature::from_celsius(celsius, to_scale)
        }
        // Units of one category never mix kinds
        _ => return Err(CalcError::unknown_unit(category.id(), to.id())),
    };
    if !result.is_finite() {
        warn!(from = from.id(), to = to.id(), value, "conversion overflowed");
        return Err(CalcError::invalid_input(
            "value",
            value.to_string(),
            format!("{} {} is out of range in {}", value, from.symbol(), to.symbol()),
        ));
    }

    debug!(category = category.id(), from = from.id(), to = to.id(), value, result, "converted");
    Ok(result)
}

/// Format a converted value with a fixed number of decimal places.
///
/// Negative zero is printed as zero.
///
/// # Example
/// ```
/// use calc_core::conversion::format_value;
///
/// assert_eq!(format_value(1.0, 6), "1.000000");
/// assert_eq!(format_value(-0.0, 2), "0.00");
/// ```
pub fn format_value(value: f64, precision: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", precision, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn all_units() -> Vec<Unit> {
        Category::ALL.iter().flat_map(|c| c.units().iter().copied()).collect()
    }

    fn same_category_pair() -> impl Strategy<Value = (Unit, Unit)> {
        prop::sample::select(Category::ALL.to_vec()).prop_flat_map(|c| {
            let units = c.units().to_vec();
            (prop::sample::select(units.clone()), prop::sample::select(units))
        })
    }

    #[test]
    fn test_meters_to_kilometers() {
        assert_eq!(convert("length", "meters", "kilometers", 1000.0).unwrap(), 1.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert("temperature", "celsius", "fahrenheit", 0.0).unwrap(), 32.0);
        assert_eq!(convert("temperature", "celsius", "fahrenheit", 100.0).unwrap(), 212.0);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        let k = convert("temperature", "fahrenheit", "kelvin", 32.0).unwrap();
        assert_relative_eq!(k, 273.15);
    }

    #[test]
    fn test_negative_temperature() {
        let f = convert("temperature", "celsius", "fahrenheit", -40.0).unwrap();
        assert_relative_eq!(f, -40.0);
    }

    #[test]
    fn test_mile_in_meters() {
        assert_eq!(convert("length", "miles", "meters", 1.0).unwrap(), 1609.344);
    }

    #[test]
    fn test_pounds_to_ounces() {
        let oz = convert("weight", "pounds", "ounces", 1.0).unwrap();
        assert_relative_eq!(oz, 16.0, max_relative = 1e-12);
    }

    #[test]
    fn test_week_in_days() {
        assert_eq!(convert("time", "weeks", "days", 1.0).unwrap(), 7.0);
    }

    #[test]
    fn test_hectare_in_square_meters() {
        assert_eq!(convert("area", "hectares", "sqmeters", 2.5).unwrap(), 25000.0);
    }

    #[test]
    fn test_unknown_category() {
        let err = convert("volume", "liters", "gallons", 1.0).unwrap_err();
        assert_eq!(err, CalcError::unknown_category("volume"));
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert("length", "meters", "furlongs", 1.0).unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("length", "furlongs"));
    }

    #[test]
    fn test_unit_from_other_category_rejected() {
        let err = convert("length", "kilograms", "meters", 1.0).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");

        let err = convert_units(1.0, Unit::Meters, Unit::Kilograms).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");

        let err = Category::Speed.convert(1.0, Unit::Feet, Unit::Fps).unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("speed", "feet"));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        assert!(convert("length", "meters", "feet", f64::NAN).is_err());
        assert!(convert("length", "meters", "meters", f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_result_rejected() {
        let err = convert("area", "sqkilometers", "sqcentimeters", 1e300).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        // c * 9 / 5 overflows before the division
        assert!(convert_units(f64::MAX, Unit::Celsius, Unit::Fahrenheit).is_err());
    }

    #[test]
    fn test_identity_is_exact_for_awkward_values() {
        let awkward = [0.1, -0.3, 1.0 / 3.0, 1e-300, 1e300, -273.15];
        for unit in all_units() {
            for v in awkward {
                let out = convert_units(v, unit, unit).unwrap();
                assert_eq!(out.to_bits(), v.to_bits(), "{} changed {}", unit, v);
            }
        }
    }

    #[test]
    fn test_default_pair() {
        assert_eq!(Category::Length.default_pair(), (Unit::Meters, Unit::Kilometers));
        assert_eq!(Category::Temperature.default_pair(), (Unit::Celsius, Unit::Fahrenheit));
        assert_eq!(Category::Area.base_unit(), Unit::SqMeters);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("speed".parse::<Category>().unwrap(), Category::Speed);
        assert!("Speed".parse::<Category>().is_err());
        assert!(Category::Temperature.is_affine());
        assert!(!Category::Length.is_affine());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.621371192, 6), "0.621371");
        assert_eq!(format_value(32.0, 6), "32.000000");
        assert_eq!(format_value(-1.5, 1), "-1.5");
    }

    proptest! {
        #[test]
        fn prop_identity_exact(pair in same_category_pair(), v in -1e9f64..1e9f64) {
            let (unit, _) = pair;
            prop_assert_eq!(convert_units(v, unit, unit).unwrap(), v);
        }

        #[test]
        fn prop_round_trip(pair in same_category_pair(), v in -1e6f64..1e6f64) {
            let (a, b) = pair;
            let there = convert_units(v, b, a).unwrap();
            let back = convert_units(there, a, b).unwrap();
            let tolerance = 1e-9 * v.abs().max(1.0);
            prop_assert!((back - v).abs() <= tolerance, "{} -> {} -> {}", v, there, back);
        }
    }
}
