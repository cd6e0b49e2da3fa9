//! Closed sets of recognised resample policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CadenceError;

/// Calendar frequency a series is resampled to.
///
/// Each variant names the canonical end-of-period date every observation is
/// moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrequencyKind {
    /// Last calendar day of the month.
    MonthEnd,
    /// Last day of the week (see `WeekStart`).
    WeekEnd,
    /// Last calendar day of the quarter (Mar 31, Jun 30, Sep 30, Dec 31).
    QuarterEnd,
    /// December 31 of the year.
    YearEnd,
}

impl FrequencyKind {
    /// Every recognised frequency, in declaration order.
    pub const ALL: [Self; 4] = [Self::MonthEnd, Self::WeekEnd, Self::QuarterEnd, Self::YearEnd];

    /// Wire name used by the `resampleFrequency` option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonthEnd => "monthEnd",
            Self::WeekEnd => "weekEnd",
            Self::QuarterEnd => "quarterEnd",
            Self::YearEnd => "yearEnd",
        }
    }
}

impl fmt::Display for FrequencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyKind {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CadenceError::invalid_parameter(CadenceError::FREQUENCY))
    }
}

/// Reduction applied to all values that land in the same period.
///
/// Implementations must give the same result for any ordering of their input;
/// an order-sensitive reduction would make the output depend on the order of
/// observations within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationKind {
    /// Smallest value of the period.
    Min,
    /// Largest value of the period.
    Max,
    /// Arithmetic sum of the period.
    Sum,
}

impl AggregationKind {
    /// Every recognised aggregation, in declaration order.
    pub const ALL: [Self; 3] = [Self::Min, Self::Max, Self::Sum];

    /// Wire name used by the `resampleFunction` option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationKind {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CadenceError::invalid_parameter(CadenceError::FUNCTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for k in FrequencyKind::ALL {
            assert_eq!(k.as_str().parse::<FrequencyKind>(), Ok(k));
        }
        for k in AggregationKind::ALL {
            assert_eq!(k.as_str().parse::<AggregationKind>(), Ok(k));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("MonthEnd".parse::<FrequencyKind>().is_err());
        assert!("SUM".parse::<AggregationKind>().is_err());
    }
}
