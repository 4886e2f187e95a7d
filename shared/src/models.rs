use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currency tags, serialized as the upper-case ISO code
/// ("INR", "USD").
///
/// The enum is closed; new codes are wired in through the engine's marker
/// table, which leaves the parsing algorithm untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Indian Rupee. Also the default for unmarked numerals.
    #[default]
    Inr,
    /// US Dollar.
    Usd,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Inr => "INR",
            CurrencyCode::Usd => "USD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monetary amount recovered from one free-text export record.
///
/// `value` is the raw decimal as written, kept as a float with no
/// minor-unit rounding. Constructed fresh per parse; never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub currency: CurrencyCode,
}

impl ParsedAmount {
    pub fn new(value: f64, currency: CurrencyCode) -> Self {
        ParsedAmount { value, currency }
    }

    /// The deterministic zero-value, default-currency result returned
    /// whenever no numeric parse is possible.
    pub fn fallback() -> Self {
        ParsedAmount {
            value: 0.0,
            currency: CurrencyCode::default(),
        }
    }
}

impl fmt::Display for ParsedAmount {
    /// Canonical form: ISO tag, one space, ungrouped signed decimal numeral.
    /// Feeding this string back through the parser yields an equal amount.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.value)
    }
}

/// Outcome of one batch run.
///
/// `blank` counts records that were empty after trimming, the one shape
/// check a caller can make ahead of the parser. Monetary values are never
/// aggregated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub blank: usize,
    pub completed_at: DateTime<Utc>,
}
