//! Unit catalog: every supported unit with its display data and scale factor.
//!
//! Scale factors express "1 of this unit equals N base units" for the unit's
//! category. Temperature units carry an affine scale instead.

use serde::{Deserialize, Serialize};

use super::temperature::TemperatureScale;
use super::Category;

/// How a unit relates to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitKind {
    /// Pure multiplicative factor to the base unit
    Linear(f64),
    /// Offset plus scale (temperature only)
    Affine(TemperatureScale),
}

/// A unit of measure. Unit ids are unique across all categories.
///
/// # Example
/// ```
/// use calc_core::conversion::{Category, Unit};
///
/// assert_eq!(Unit::Miles.id(), "miles");
/// assert_eq!(Unit::Miles.symbol(), "mi");
/// assert_eq!(Unit::Miles.category(), Category::Length);
/// assert_eq!(Unit::Miles.scale(), Some(1609.344));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // Length (base: meters)
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Miles,
    Yards,
    Feet,
    Inches,
    // Weight (base: kilograms)
    Kilograms,
    Grams,
    Milligrams,
    Pounds,
    Ounces,
    Tons,
    // Temperature (reference: celsius)
    Celsius,
    Fahrenheit,
    Kelvin,
    // Time (base: seconds)
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    // Speed (base: meters per second)
    Mps,
    Kph,
    Mph,
    Fps,
    Knots,
    // Area (base: square meters)
    SqMeters,
    SqKilometers,
    SqCentimeters,
    SqFeet,
    SqMiles,
    Acres,
    Hectares,
}

impl Unit {
    pub(crate) const LENGTH: [Unit; 8] = [
        Unit::Meters,
        Unit::Kilometers,
        Unit::Centimeters,
        Unit::Millimeters,
        Unit::Miles,
        Unit::Yards,
        Unit::Feet,
        Unit::Inches,
    ];

    pub(crate) const WEIGHT: [Unit; 6] = [
        Unit::Kilograms,
        Unit::Grams,
        Unit::Milligrams,
        Unit::Pounds,
        Unit::Ounces,
        Unit::Tons,
    ];

    pub(crate) const TEMPERATURE: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    pub(crate) const TIME: [Unit; 7] = [
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Weeks,
        Unit::Months,
        Unit::Years,
    ];

    pub(crate) const SPEED: [Unit; 5] = [Unit::Mps, Unit::Kph, Unit::Mph, Unit::Fps, Unit::Knots];

    pub(crate) const AREA: [Unit; 7] = [
        Unit::SqMeters,
        Unit::SqKilometers,
        Unit::SqCentimeters,
        Unit::SqFeet,
        Unit::SqMiles,
        Unit::Acres,
        Unit::Hectares,
    ];

    /// Look up a unit by its id in any category
    pub fn from_id(id: &str) -> Option<Unit> {
        Category::ALL
            .iter()
            .flat_map(|c| c.units().iter())
            .copied()
            .find(|u| u.id() == id)
    }

    /// The category this unit belongs to
    pub fn category(&self) -> Category {
        match self {
            Unit::Meters
            | Unit::Kilometers
            | Unit::Centimeters
            | Unit::Millimeters
            | Unit::Miles
            | Unit::Yards
            | Unit::Feet
            | Unit::Inches => Category::Length,
            Unit::Kilograms
            | Unit::Grams
            | Unit::Milligrams
            | Unit::Pounds
            | Unit::Ounces
            | Unit::Tons => Category::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Seconds
            | Unit::Minutes
            | Unit::Hours
            | Unit::Days
            | Unit::Weeks
            | Unit::Months
            | Unit::Years => Category::Time,
            Unit::Mps | Unit::Kph | Unit::Mph | Unit::Fps | Unit::Knots => Category::Speed,
            Unit::SqMeters
            | Unit::SqKilometers
            | Unit::SqCentimeters
            | Unit::SqFeet
            | Unit::SqMiles
            | Unit::Acres
            | Unit::Hectares => Category::Area,
        }
    }

    /// Stable id used in requests and JSON
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Centimeters => "centimeters",
            Unit::Millimeters => "millimeters",
            Unit::Miles => "miles",
            Unit::Yards => "yards",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
            Unit::Kilograms => "kilograms",
            Unit::Grams => "grams",
            Unit::Milligrams => "milligrams",
            Unit::Pounds => "pounds",
            Unit::Ounces => "ounces",
            Unit::Tons => "tons",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
            Unit::Mps => "mps",
            Unit::Kph => "kph",
            Unit::Mph => "mph",
            Unit::Fps => "fps",
            Unit::Knots => "knots",
            Unit::SqMeters => "sqmeters",
            Unit::SqKilometers => "sqkilometers",
            Unit::SqCentimeters => "sqcentimeters",
            Unit::SqFeet => "sqfeet",
            Unit::SqMiles => "sqmiles",
            Unit::Acres => "acres",
            Unit::Hectares => "hectares",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Meters => "Meters",
            Unit::Kilometers => "Kilometers",
            Unit::Centimeters => "Centimeters",
            Unit::Millimeters => "Millimeters",
            Unit::Miles => "Miles",
            Unit::Yards => "Yards",
            Unit::Feet => "Feet",
            Unit::Inches => "Inches",
            Unit::Kilograms => "Kilograms",
            Unit::Grams => "Grams",
            Unit::Milligrams => "Milligrams",
            Unit::Pounds => "Pounds",
            Unit::Ounces => "Ounces",
            Unit::Tons => "Metric Tons",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Seconds => "Seconds",
            Unit::Minutes => "Minutes",
            Unit::Hours => "Hours",
            Unit::Days => "Days",
            Unit::Weeks => "Weeks",
            Unit::Months => "Months",
            Unit::Years => "Years",
            Unit::Mps => "Meters/Second",
            Unit::Kph => "Kilometers/Hour",
            Unit::Mph => "Miles/Hour",
            Unit::Fps => "Feet/Second",
            Unit::Knots => "Knots",
            Unit::SqMeters => "Square Meters",
            Unit::SqKilometers => "Square Kilometers",
            Unit::SqCentimeters => "Square Centimeters",
            Unit::SqFeet => "Square Feet",
            Unit::SqMiles => "Square Miles",
            Unit::Acres => "Acres",
            Unit::Hectares => "Hectares",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Centimeters => "cm",
            Unit::Millimeters => "mm",
            Unit::Miles => "mi",
            Unit::Yards => "yd",
            Unit::Feet => "ft",
            Unit::Inches => "in",
            Unit::Kilograms => "kg",
            Unit::Grams => "g",
            Unit::Milligrams => "mg",
            Unit::Pounds => "lb",
            Unit::Ounces => "oz",
            Unit::Tons => "t",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
            Unit::Seconds => "s",
            Unit::Minutes => "min",
            Unit::Hours => "hr",
            Unit::Days => "d",
            Unit::Weeks => "wk",
            Unit::Months => "mo",
            Unit::Years => "yr",
            Unit::Mps => "m/s",
            Unit::Kph => "km/h",
            Unit::Mph => "mph",
            Unit::Fps => "ft/s",
            Unit::Knots => "kn",
            Unit::SqMeters => "m²",
            Unit::SqKilometers => "km²",
            Unit::SqCentimeters => "cm²",
            Unit::SqFeet => "ft²",
            Unit::SqMiles => "mi²",
            Unit::Acres => "ac",
            Unit::Hectares => "ha",
        }
    }

    /// How this unit maps onto its category's base unit
    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Meters => UnitKind::Linear(1.0),
            Unit::Kilometers => UnitKind::Linear(1000.0),
            Unit::Centimeters => UnitKind::Linear(0.01),
            Unit::Millimeters => UnitKind::Linear(0.001),
            Unit::Miles => UnitKind::Linear(1609.344),
            Unit::Yards => UnitKind::Linear(0.9144),
            Unit::Feet => UnitKind::Linear(0.3048),
            Unit::Inches => UnitKind::Linear(0.0254),

            Unit::Kilograms => UnitKind::Linear(1.0),
            Unit::Grams => UnitKind::Linear(0.001),
            Unit::Milligrams => UnitKind::Linear(0.000001),
            Unit::Pounds => UnitKind::Linear(0.45359237),
            Unit::Ounces => UnitKind::Linear(0.028349523125),
            Unit::Tons => UnitKind::Linear(1000.0),

            Unit::Celsius => UnitKind::Affine(TemperatureScale::Celsius),
            Unit::Fahrenheit => UnitKind::Affine(TemperatureScale::Fahrenheit),
            Unit::Kelvin => UnitKind::Affine(TemperatureScale::Kelvin),

            Unit::Seconds => UnitKind::Linear(1.0),
            Unit::Minutes => UnitKind::Linear(60.0),
            Unit::Hours => UnitKind::Linear(3600.0),
            Unit::Days => UnitKind::Linear(86400.0),
            Unit::Weeks => UnitKind::Linear(604800.0),
            // Average month (365 days / 12)
            Unit::Months => UnitKind::Linear(2628000.0),
            Unit::Years => UnitKind::Linear(31536000.0),

            Unit::Mps => UnitKind::Linear(1.0),
            Unit::Kph => UnitKind::Linear(0.277778),
            Unit::Mph => UnitKind::Linear(0.44704),
            Unit::Fps => UnitKind::Linear(0.3048),
            Unit::Knots => UnitKind::Linear(0.514444),

            Unit::SqMeters => UnitKind::Linear(1.0),
            Unit::SqKilometers => UnitKind::Linear(1000000.0),
            Unit::SqCentimeters => UnitKind::Linear(0.0001),
            Unit::SqFeet => UnitKind::Linear(0.092903),
            Unit::SqMiles => UnitKind::Linear(2589988.11),
            Unit::Acres => UnitKind::Linear(4046.86),
            Unit::Hectares => UnitKind::Linear(10000.0),
        }
    }

    /// Linear scale factor to the base unit, or `None` for affine units
    pub fn scale(&self) -> Option<f64> {
        match self.kind() {
            UnitKind::Linear(scale) => Some(scale),
            UnitKind::Affine(_) => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Category::ALL
            .iter()
            .flat_map(|c| c.units().iter())
            .map(|u| u.id())
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 36);
    }

    #[test]
    fn test_units_listed_under_own_category() {
        for category in Category::ALL {
            for unit in category.units() {
                assert_eq!(unit.category(), category, "{} misfiled", unit);
            }
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Unit::from_id("knots"), Some(Unit::Knots));
        assert_eq!(Unit::from_id("sqmiles"), Some(Unit::SqMiles));
        assert_eq!(Unit::from_id("furlongs"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        for category in Category::ALL {
            for unit in category.units() {
                let json = serde_json::to_string(unit).unwrap();
                assert_eq!(json, format!("\"{}\"", unit.id()));
            }
        }
    }

    #[test]
    fn test_only_temperature_is_affine() {
        for category in Category::ALL {
            for unit in category.units() {
                let affine = unit.scale().is_none();
                assert_eq!(affine, category == Category::Temperature, "{}", unit);
            }
        }
    }

    #[test]
    fn test_base_units_have_unit_scale() {
        assert_eq!(Unit::Meters.scale(), Some(1.0));
        assert_eq!(Unit::Kilograms.scale(), Some(1.0));
        assert_eq!(Unit::Seconds.scale(), Some(1.0));
        assert_eq!(Unit::Mps.scale(), Some(1.0));
        assert_eq!(Unit::SqMeters.scale(), Some(1.0));
    }
}
