//! Cadence data transfer objects, option enums and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod kinds;
mod options;
mod series;

pub use config::{CadenceConfig, KeyOrder, WeekStart};
pub use error::CadenceError;
pub use kinds::{AggregationKind, FrequencyKind};
pub use options::{RawOptions, ResampleOptions};
pub use series::{Point, RawPoint, ResultPoint};
