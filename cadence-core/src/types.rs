//! Re-export of foundational types from `cadence-types`.
// Consolidated re-exports so downstream crates can depend on `cadence-core` only

pub use cadence_types::{AggregationKind, CadenceError, FrequencyKind};
pub use cadence_types::{CadenceConfig, KeyOrder, WeekStart};
pub use cadence_types::{Point, RawOptions, RawPoint, ResampleOptions, ResultPoint};
