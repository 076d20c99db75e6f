//! # calc_core - Educational Calculator Engine
//!
//! `calc_core` is the computational heart of Calcademy: unit and currency
//! conversion plus a right-triangle solver for the trigonometry tutor. All
//! inputs and outputs are JSON-serializable, so the same engine backs the
//! CLI, a REST layer, or an AI tutor's tool calls.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Typed Lookups**: Categories, units and currencies are enums; string
//!   ids are validated once at the boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::conversion::convert;
//! use calc_core::trig::{solve, SolveRule};
//!
//! let feet = convert("length", "meters", "feet", 3.048).unwrap();
//! assert!((feet - 10.0).abs() < 1e-9);
//!
//! let result = solve(Some(3.0), Some(4.0), Some(5.0)).unwrap();
//! assert_eq!(result.rule, SolveRule::PythagoreanCheck);
//! ```
//!
//! ## Modules
//!
//! - [`conversion`] - Unit catalog, conversion, currency, history
//! - [`trig`] - Right-triangle solver, trig ratios, practice problems
//! - [`equations`] - Underlying trigonometric formulas
//! - [`calculations`] - Tagged request/outcome types for JSON callers
//! - [`units`] - Degree/radian newtypes
//! - [`settings`] - Display and history preferences
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings and exchange-rate files

pub mod calculations;
pub mod conversion;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod settings;
pub mod trig;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationOutcome, CalculationRequest};
pub use conversion::{convert, Category, Unit};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_exchange_rates, load_settings, save_settings};
pub use settings::Settings;
pub use trig::{all_trig_values, solve, SolveResult, SolveRule};
