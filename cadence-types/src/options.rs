//! Caller-supplied resample options, raw and validated.

use serde::{Deserialize, Serialize};

use crate::error::CadenceError;
use crate::kinds::{AggregationKind, FrequencyKind};

/// Options exactly as received from the transport (query parameters).
///
/// Both fields are optional strings; nothing is checked until the options are
/// converted into [`ResampleOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOptions {
    /// Requested frequency name, e.g. `"monthEnd"`.
    #[serde(rename = "resampleFrequency", default)]
    pub resample_frequency: Option<String>,
    /// Requested aggregation name, e.g. `"sum"`.
    #[serde(rename = "resampleFunction", default)]
    pub resample_function: Option<String>,
}

impl RawOptions {
    /// Build raw options from two optional names.
    pub fn new(frequency: Option<&str>, function: Option<&str>) -> Self {
        Self {
            resample_frequency: frequency.map(str::to_owned),
            resample_function: function.map(str::to_owned),
        }
    }
}

/// Validated resample options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResampleOptions {
    /// Target calendar frequency.
    pub frequency: FrequencyKind,
    /// Reduction applied within each period.
    pub function: AggregationKind,
}

impl ResampleOptions {
    /// Construct validated options directly from the enums.
    #[must_use]
    pub const fn new(frequency: FrequencyKind, function: AggregationKind) -> Self {
        Self {
            frequency,
            function,
        }
    }
}

impl TryFrom<&RawOptions> for ResampleOptions {
    type Error = CadenceError;

    /// The frequency is checked before the function, so a request missing both
    /// reports the frequency.
    fn try_from(raw: &RawOptions) -> Result<Self, Self::Error> {
        let frequency = raw
            .resample_frequency
            .as_deref()
            .ok_or_else(|| CadenceError::invalid_parameter(CadenceError::FREQUENCY))?
            .parse::<FrequencyKind>()?;
        let function = raw
            .resample_function
            .as_deref()
            .ok_or_else(|| CadenceError::invalid_parameter(CadenceError::FUNCTION))?
            .parse::<AggregationKind>()?;
        Ok(Self {
            frequency,
            function,
        })
    }
}
