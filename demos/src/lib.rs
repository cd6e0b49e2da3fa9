//! Shared helpers for the cadence demos.
pub mod common;
