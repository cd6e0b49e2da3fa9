use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the cadence workspace.
///
/// Every variant is a request-level validation failure. None of them is
/// retried internally; the first one raised aborts the whole transform and is
/// surfaced to the caller verbatim.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CadenceError {
    /// A resample option is missing or names an unknown policy.
    #[error("invalid parameter: {name}")]
    InvalidParameter {
        /// Short parameter name: `"frequency"` or `"function"`.
        name: String,
    },

    /// A series entry carries a date that could not be parsed.
    #[error("invalid date: {text}")]
    InvalidDate {
        /// The date text exactly as received.
        text: String,
    },

    /// A series entry carries a value that is not a finite number.
    #[error("invalid value: {raw}")]
    InvalidValue {
        /// The original value rendered as text (strings without quotes).
        raw: String,
    },

    /// The request body is not a sequence of `[date, value]` pairs.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

impl CadenceError {
    /// Parameter name reported when `resampleFrequency` is missing or unknown.
    pub const FREQUENCY: &'static str = "frequency";
    /// Parameter name reported when `resampleFunction` is missing or unknown.
    pub const FUNCTION: &'static str = "function";

    /// Helper: build an `InvalidParameter` error for the given parameter name.
    pub fn invalid_parameter(name: impl Into<String>) -> Self {
        Self::InvalidParameter { name: name.into() }
    }

    /// Helper: build an `InvalidDate` error carrying the offending text.
    pub fn invalid_date(text: impl Into<String>) -> Self {
        Self::InvalidDate { text: text.into() }
    }

    /// Helper: build an `InvalidValue` error carrying the offending value.
    pub fn invalid_value(raw: impl Into<String>) -> Self {
        Self::InvalidValue { raw: raw.into() }
    }

    /// Human-readable failure reason for transports (e.g. an HTTP 400 body).
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for the option-validation failure, raised before any data is read.
    #[must_use]
    pub const fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
