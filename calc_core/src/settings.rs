//! # Settings
//!
//! Display and history preferences shared by front ends. Settings serialize
//! to human-readable JSON; see [`crate::file_io`] for loading and saving.
//!
//! Missing fields take their defaults, so a partial file such as
//! `{ "display_precision": 3 }` is valid.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{ "display_precision": 3 }"#).unwrap();
//! assert_eq!(settings.display_precision, 3);
//! assert_eq!(settings.history_capacity, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::conversion::history::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
use crate::conversion::ConversionHistory;
use crate::errors::{CalcError, CalcResult};

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Largest precision `format!` can represent meaningfully for f64
const MAX_PRECISION: usize = 15;

/// Front-end preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Decimal places for unit conversion results
    pub display_precision: usize,

    /// Decimal places for currency results
    pub currency_precision: usize,

    /// Decimal places for angles and ratios
    pub angle_precision: usize,

    /// Number of conversions kept in history (1 to 1000)
    pub history_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SCHEMA_VERSION.to_string(),
            display_precision: 6,
            currency_precision: 2,
            angle_precision: 2,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Settings {
    /// Validate value ranges.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, precision) in [
            ("display_precision", self.display_precision),
            ("currency_precision", self.currency_precision),
            ("angle_precision", self.angle_precision),
        ] {
            if precision > MAX_PRECISION {
                return Err(CalcError::invalid_input(
                    field,
                    precision.to_string(),
                    format!("Precision must be at most {}", MAX_PRECISION),
                ));
            }
        }
        if !(1..=MAX_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(CalcError::invalid_input(
                "history_capacity",
                self.history_capacity.to_string(),
                format!("History capacity must be between 1 and {}", MAX_HISTORY_CAPACITY),
            ));
        }
        Ok(())
    }

    /// Empty history sized by these settings
    pub fn new_history(&self) -> ConversionHistory {
        ConversionHistory::new(self.history_capacity)
    }
}
