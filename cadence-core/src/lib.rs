//! cadence-core
//!
//! Resampling of irregular, date-keyed numeric series to fixed calendar
//! frequencies.
//!
//! - `validate`: check the resample options before any data is read.
//! - `normalize`: parse raw `[dateText, value]` pairs into validated points.
//! - `timeseries`: period resolution, aggregation and the resampler.
//! - `transform`: the composed entry point, `resample_series`.
//!
//! Every operation is pure and synchronous. Nothing is shared between calls
//! apart from the immutable `CadenceConfig` passed in, so concurrent callers
//! need no synchronization.
#![warn(missing_docs)]

/// Raw series normalization.
pub mod normalize;
/// Calendar time-series utilities.
pub mod timeseries;
/// Composed transform entry points.
pub mod transform;
pub mod types;
/// Option validation.
pub mod validate;

pub use normalize::{coerce_value, normalize, normalize_point, parse_date};
pub use timeseries::aggregate::{aggregate, aggregate_group};
pub use timeseries::period::{period_key, resolve_period_end};
pub use timeseries::resample::resample;
pub use transform::{resample_json, resample_series};
pub use types::*;
pub use validate::validate;
