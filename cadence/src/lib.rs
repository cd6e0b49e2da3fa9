//! Cadence resamples irregular, date-keyed numeric series to a fixed calendar
//! frequency.
//!
//! Overview
//! - Every observation is moved to the end date of its period (`monthEnd`,
//!   `weekEnd`, `quarterEnd` or `yearEnd`) and observations sharing a period
//!   are reduced with `min`, `max` or `sum`.
//! - Options are validated before any data is read; malformed dates or values
//!   abort the whole request. There are no partial results.
//! - Periods without observations are not emitted; nothing is interpolated.
//!
//! Key behaviors and trade-offs
//! - Week convention: ISO weeks by default (`weekEnd` is a Sunday); Sunday-start
//!   weeks are available through the builder.
//! - Output order: first appearance of each period by default, chronological
//!   on request.
//! - Transport concerns (HTTP status, envelopes) stay with the caller; errors
//!   carry a human-readable `message()` to hand back.
//!
//! Examples
//! ```
//! use cadence::{Cadence, RawOptions, RawPoint, ResultPoint};
//!
//! let cadence = Cadence::builder().build();
//! let series = vec![
//!     RawPoint::new("2017-05-05", 22.5),
//!     RawPoint::new("2017-05-20", 10.0),
//!     RawPoint::new("2017-10-10", 44.5),
//! ];
//! let out = cadence
//!     .resample_series(&series, &RawOptions::new(Some("monthEnd"), Some("sum")))
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     vec![
//!         ResultPoint("2017-05-31".into(), 32.5),
//!         ResultPoint("2017-10-31".into(), 44.5),
//!     ]
//! );
//! ```
#![warn(missing_docs)]

mod core;

pub use crate::core::{Cadence, CadenceBuilder};
pub use cadence_core::{
    AggregationKind, CadenceConfig, CadenceError, FrequencyKind, KeyOrder, Point, RawOptions,
    RawPoint, ResampleOptions, ResultPoint, WeekStart,
};
pub use cadence_types as types;
