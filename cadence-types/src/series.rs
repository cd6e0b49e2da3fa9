//! Series units at each stage of the transform.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One unvalidated input observation: `[dateText, value]`.
///
/// The value is kept as an arbitrary JSON value so that numeric strings and
/// malformed entries reach the normalizer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint(pub String, pub serde_json::Value);

impl RawPoint {
    /// Build a raw point from a date text and any JSON-convertible value.
    pub fn new(date: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self(date.into(), value.into())
    }

    /// Date text as received.
    #[must_use]
    pub fn date_text(&self) -> &str {
        &self.0
    }

    /// Value as received.
    #[must_use]
    pub const fn value(&self) -> &serde_json::Value {
        &self.1
    }
}

/// A validated observation: a calendar date and a finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Observed value; always finite.
    pub value: f64,
}

/// One output observation: `[periodKey, aggregatedValue]`.
///
/// The key is the period's end date formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPoint(pub String, pub f64);

impl ResultPoint {
    /// Period key (`YYYY-MM-DD`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Aggregated value of the period.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.1
    }
}
