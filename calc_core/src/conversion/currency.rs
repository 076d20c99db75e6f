//! # Currency Conversion
//!
//! Converts money amounts through a base currency using a rate table the
//! caller supplies (fetching live rates is the caller's job). Rates are
//! "units of currency per 1 base unit", the shape exchange-rate APIs return:
//!
//! ```json
//! { "base": "USD", "time_last_updated": 1760832000, "rates": { "USD": 1, "EUR": 0.92 } }
//! ```
//!
//! Codes in `rates` outside the supported list are kept but ignored.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Supported currencies (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Inr,
    Mxn,
    Brl,
    Zar,
    Rub,
    Krw,
    Sgd,
    Nzd,
    Try,
    Hkd,
    Nok,
    Sek,
}

impl Currency {
    /// All supported currencies in display order
    pub const ALL: [Currency; 20] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Inr,
        Currency::Mxn,
        Currency::Brl,
        Currency::Zar,
        Currency::Rub,
        Currency::Krw,
        Currency::Sgd,
        Currency::Nzd,
        Currency::Try,
        Currency::Hkd,
        Currency::Nok,
        Currency::Sek,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
            Currency::Mxn => "MXN",
            Currency::Brl => "BRL",
            Currency::Zar => "ZAR",
            Currency::Rub => "RUB",
            Currency::Krw => "KRW",
            Currency::Sgd => "SGD",
            Currency::Nzd => "NZD",
            Currency::Try => "TRY",
            Currency::Hkd => "HKD",
            Currency::Nok => "NOK",
            Currency::Sek => "SEK",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Aud => "Australian Dollar",
            Currency::Cad => "Canadian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Cny => "Chinese Yuan",
            Currency::Inr => "Indian Rupee",
            Currency::Mxn => "Mexican Peso",
            Currency::Brl => "Brazilian Real",
            Currency::Zar => "South African Rand",
            Currency::Rub => "Russian Ruble",
            Currency::Krw => "South Korean Won",
            Currency::Sgd => "Singapore Dollar",
            Currency::Nzd => "New Zealand Dollar",
            Currency::Try => "Turkish Lira",
            Currency::Hkd => "Hong Kong Dollar",
            Currency::Nok => "Norwegian Krone",
            Currency::Sek => "Swedish Krona",
        }
    }

    /// Display symbol (not unique: several currencies share "$" or "kr")
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
            Currency::Chf => "CHF",
            Currency::Cny => "¥",
            Currency::Inr => "₹",
            Currency::Mxn => "$",
            Currency::Brl => "R$",
            Currency::Zar => "R",
            Currency::Rub => "₽",
            Currency::Krw => "₩",
            Currency::Sgd => "S$",
            Currency::Nzd => "NZ$",
            Currency::Try => "₺",
            Currency::Hkd => "HK$",
            Currency::Nok => "kr",
            Currency::Sek => "kr",
        }
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    /// Parse a code, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CalcError::unknown_currency(s))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn default_base() -> Currency {
    Currency::Usd
}

/// Exchange rate snapshot relative to a base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Currency every rate is quoted against
    #[serde(default = "default_base")]
    pub base: Currency,

    /// Unix timestamp (seconds) of the snapshot, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_last_updated: Option<i64>,

    /// Units of each currency per 1 unit of `base`, keyed by code
    pub rates: BTreeMap<String, f64>,
}

impl ExchangeRates {
    /// Create an empty table quoted against `base`
    pub fn new(base: Currency) -> Self {
        ExchangeRates {
            base,
            time_last_updated: None,
            rates: BTreeMap::new(),
        }
    }

    /// Builder: set the rate for one currency
    pub fn with_rate(mut self, currency: Currency, rate: f64) -> Self {
        self.rates.insert(currency.code().to_string(), rate);
        self
    }

    /// Builder: set the snapshot time
    pub fn with_timestamp(mut self, unix_seconds: i64) -> Self {
        self.time_last_updated = Some(unix_seconds);
        self
    }

    /// When the snapshot was taken
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.time_last_updated
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Rate for `currency` against the base.
    ///
    /// The base currency is 1.0 even when the table omits it. A missing,
    /// non-positive, or non-finite rate is `MissingRate`.
    pub fn rate(&self, currency: Currency) -> CalcResult<f64> {
        match self.rates.get(currency.code()) {
            Some(&rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
            None if currency == self.base => Ok(1.0),
            _ => Err(CalcError::missing_rate(currency.code())),
        }
    }

    /// Supported currencies that have a usable rate
    pub fn available(&self) -> Vec<Currency> {
        Currency::ALL
            .iter()
            .copied()
            .filter(|c| self.rate(*c).is_ok())
            .collect()
    }
}

/// Convert `amount` from one currency to another via the table's base.
///
/// # Example
/// ```
/// use calc_core::conversion::{convert_currency, Currency, ExchangeRates};
///
/// let rates = ExchangeRates::new(Currency::Usd)
///     .with_rate(Currency::Eur, 0.5)
///     .with_rate(Currency::Gbp, 0.25);
///
/// let gbp = convert_currency(10.0, Currency::Eur, Currency::Gbp, &rates).unwrap();
/// assert_eq!(gbp, 5.0);
/// ```
pub fn convert_currency(amount: f64, from: Currency, to: Currency, rates: &ExchangeRates) -> CalcResult<f64> {
    if !amount.is_finite() {
        return Err(CalcError::invalid_input(
            "amount",
            amount.to_string(),
            "Amount must be a finite number",
        ));
    }
    if from == to {
        return Ok(amount);
    }

    let in_base = amount / rates.rate(from)?;
    let result = in_base * rates.rate(to)?;

    debug!(from = from.code(), to = to.code(), amount, result, "converted currency");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_rates() -> ExchangeRates {
        ExchangeRates::new(Currency::Usd)
            .with_rate(Currency::Usd, 1.0)
            .with_rate(Currency::Eur, 0.92)
            .with_rate(Currency::Jpy, 150.0)
            .with_timestamp(1_760_832_000)
    }

    #[test]
    fn test_same_currency_unchanged() {
        let rates = ExchangeRates::new(Currency::Usd);
        assert_eq!(convert_currency(12.34, Currency::Sek, Currency::Sek, &rates).unwrap(), 12.34);
    }

    #[test]
    fn test_from_base() {
        let eur = convert_currency(100.0, Currency::Usd, Currency::Eur, &sample_rates()).unwrap();
        assert_relative_eq!(eur, 92.0, max_relative = 1e-12);
    }

    #[test]
    fn test_cross_rate() {
        let jpy = convert_currency(92.0, Currency::Eur, Currency::Jpy, &sample_rates()).unwrap();
        assert_relative_eq!(jpy, 15000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_missing_rate() {
        let err = convert_currency(1.0, Currency::Usd, Currency::Gbp, &sample_rates()).unwrap_err();
        assert_eq!(err, CalcError::missing_rate("GBP"));
    }

    #[test]
    fn test_zero_rate_is_missing() {
        let rates = ExchangeRates::new(Currency::Usd).with_rate(Currency::Eur, 0.0);
        assert!(rates.rate(Currency::Eur).is_err());
        assert_eq!(rates.rate(Currency::Usd).unwrap(), 1.0);
    }

    #[test]
    fn test_parse_code() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(" TRY ".parse::<Currency>().unwrap(), Currency::Try);
        assert_eq!("XYZ".parse::<Currency>().unwrap_err().error_code(), "UNKNOWN_CURRENCY");
    }

    #[test]
    fn test_api_snapshot_shape() {
        let json = r#"{
            "base": "USD",
            "time_last_updated": 1760832000,
            "rates": { "USD": 1, "EUR": 0.92, "AED": 3.6725 }
        }"#;
        let rates: ExchangeRates = serde_json::from_str(json).unwrap();
        assert_eq!(rates.base, Currency::Usd);
        assert_eq!(rates.available(), vec![Currency::Usd, Currency::Eur]);
        assert_eq!(rates.last_updated().unwrap().timestamp(), 1_760_832_000);
    }

    #[test]
    fn test_base_defaults_to_usd() {
        let rates: ExchangeRates = serde_json::from_str(r#"{ "rates": { "EUR": 0.9 } }"#).unwrap();
        assert_eq!(rates.base, Currency::Usd);
        assert!(rates.last_updated().is_none());
    }
}
