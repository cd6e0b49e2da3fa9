//! Configuration shared by the resampler service and the core transform.

use serde::{Deserialize, Serialize};

/// First day of the week used by the `weekEnd` frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    /// ISO-8601 weeks: Monday through Sunday, so `weekEnd` is a Sunday.
    #[default]
    Monday,
    /// Sunday through Saturday, so `weekEnd` is a Saturday.
    Sunday,
}

/// Order in which resampled periods are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyOrder {
    /// Order of first appearance of each period key in the input.
    #[default]
    FirstSeen,
    /// Ascending by period end date.
    Chronological,
}

/// Global configuration for the resampler.
///
/// Built once and never mutated; every request reads the same instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Week convention used by `weekEnd`.
    #[serde(default)]
    pub week_start: WeekStart,
    /// Output ordering of the resampled periods.
    #[serde(default)]
    pub key_order: KeyOrder,
}
