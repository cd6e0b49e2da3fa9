//! Calendar time-series utilities.
//!
//! Modules include:
//! - `period`: resolve the canonical end date of a calendar period
//! - `aggregate`: reduce the values of one period to a scalar
//! - `resample`: group points by period and aggregate each group
/// Aggregation functions by kind.
pub mod aggregate;
/// Period end resolution and key formatting.
pub mod period;
/// Grouping and reduction of points into periods.
pub mod resample;
