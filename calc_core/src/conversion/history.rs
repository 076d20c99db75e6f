//! Conversion history: a bounded, newest-first list of recent conversions.
//!
//! The history is a plain owned value with no interior mutability. Callers
//! that share one across threads wrap it themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{convert_units, format_value, Category, Unit};
use crate::errors::CalcResult;

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Largest capacity accepted from settings files
pub const MAX_HISTORY_CAPACITY: usize = 1000;

/// One performed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: Uuid,
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub from_symbol: String,
    pub to_symbol: String,
    /// Input value as entered
    pub value: f64,
    /// Unrounded result
    pub result: f64,
    /// Result as displayed
    pub formatted: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    /// Build a record for an already computed conversion
    pub fn new(value: f64, from: Unit, to: Unit, result: f64, precision: usize) -> Self {
        ConversionRecord {
            id: Uuid::new_v4(),
            category: from.category(),
            from,
            to,
            from_symbol: from.symbol().to_string(),
            to_symbol: to.symbol().to_string(),
            value,
            result,
            formatted: format_value(result, precision),
            timestamp: Utc::now(),
        }
    }

    /// Recompute this conversion (e.g. when a user reloads it from history)
    pub fn replay(&self) -> CalcResult<f64> {
        convert_units(self.value, self.from, self.to)
    }

    /// One-line summary, e.g. `1000 m = 1.000000 km`
    pub fn summary(&self) -> String {
        format!("{} {} = {} {}", self.value, self.from_symbol, self.formatted, self.to_symbol)
    }
}

/// Newest-first conversion log with a fixed capacity.
///
/// # Example
/// ```
/// use calc_core::conversion::{ConversionHistory, Unit};
///
/// let mut history = ConversionHistory::new(2);
/// history.convert_and_record(1.0, Unit::Miles, Unit::Kilometers, 6).unwrap();
/// history.convert_and_record(2.0, Unit::Miles, Unit::Kilometers, 6).unwrap();
/// history.convert_and_record(3.0, Unit::Miles, Unit::Kilometers, 6).unwrap();
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().value, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionHistory {
    capacity: usize,
    entries: Vec<ConversionRecord>,
}

impl ConversionHistory {
    /// Create an empty history keeping at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        ConversionHistory {
            capacity,
            entries: Vec::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    /// Add a record at the front, dropping the oldest beyond capacity
    pub fn record(&mut self, record: ConversionRecord) {
        self.entries.insert(0, record);
        self.entries.truncate(self.capacity);
    }

    /// Convert and log the result in one step
    pub fn convert_and_record(&mut self, value: f64, from: Unit, to: Unit, precision: usize) -> CalcResult<f64> {
        let result = convert_units(value, from, to)?;
        self.record(ConversionRecord::new(value, from, to, result, precision));
        Ok(result)
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[ConversionRecord] {
        &self.entries
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ConversionHistory {
    fn default() -> Self {
        ConversionHistory::new(DEFAULT_HISTORY_CAPACITY)
    }
}
