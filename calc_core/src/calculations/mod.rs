//! # Calculation Requests
//!
//! A single tagged entry point over every operation, so JSON callers (the CLI
//! `eval` command, an HTTP layer, an LLM tool) can drive the engine without
//! knowing the individual function signatures.
//!
//! Each request follows the pattern:
//!
//! - `CalculationRequest` - what to compute (JSON-serializable, `"type"` tag)
//! - `CalculationOutcome` - the result (JSON-serializable, `"type"` tag)
//! - `evaluate()` - pure dispatch to the underlying module
//!
//! ## JSON Examples
//!
//! ```json
//! { "type": "Convert", "category": "length", "fromUnit": "meters", "toUnit": "kilometers", "value": 1000 }
//! { "type": "Solve", "opposite": 3, "hypotenuse": 5 }
//! { "type": "TrigValues", "angleDegrees": 30 }
//! { "type": "Currency", "amount": 100, "from": "USD", "to": "EUR" }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversion::{self, format_value, Currency, ExchangeRates};
use crate::errors::{CalcError, CalcResult};
use crate::settings::Settings;
use crate::trig::{self, SolveResult, TrigTable, TriangleSides};

/// Unit conversion by ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

/// Currency conversion by ISO codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

/// Any supported calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    Convert(ConvertRequest),
    Solve(TriangleSides),
    TrigValues {
        #[serde(rename = "angleDegrees")]
        angle_degrees: f64,
    },
    Currency(CurrencyRequest),
}

/// Result of [`CalculationRequest::evaluate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Converted { value: f64, formatted: String },
    Solved(SolveResult),
    TrigValues(TrigTable),
    Currency { amount: f64, formatted: String },
}

impl CalculationRequest {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Convert(_) => "Convert",
            CalculationRequest::Solve(_) => "Solve",
            CalculationRequest::TrigValues { .. } => "TrigValues",
            CalculationRequest::Currency(_) => "Currency",
        }
    }

    /// Run the request.
    ///
    /// `rates` is only consulted by currency requests; without it they fail
    /// with `MissingRate` for the source currency.
    pub fn evaluate(&self, settings: &Settings, rates: Option<&ExchangeRates>) -> CalcResult<CalculationOutcome> {
        debug!(calc_type = self.calc_type(), "evaluating request");
        match self {
            CalculationRequest::Convert(req) => {
                let value = conversion::convert(&req.category, &req.from_unit, &req.to_unit, req.value)?;
                Ok(CalculationOutcome::Converted {
                    value,
                    formatted: format_value(value, settings.display_precision),
                })
            }
            CalculationRequest::Solve(sides) => Ok(CalculationOutcome::Solved(trig::solve_sides(sides)?)),
            CalculationRequest::TrigValues { angle_degrees } => {
                Ok(CalculationOutcome::TrigValues(trig::all_trig_values(*angle_degrees)?.to_table()))
            }
            CalculationRequest::Currency(req) => {
                let from: Currency = req.from.parse()?;
                let to: Currency = req.to.parse()?;
                let rates = rates.ok_or_else(|| CalcError::missing_rate(req.from.to_ascii_uppercase()))?;
                let amount = conversion::convert_currency(req.amount, from, to, rates)?;
                Ok(CalculationOutcome::Currency {
                    amount,
                    formatted: format_value(amount, settings.currency_precision),
                })
            }
        }
    }
}
