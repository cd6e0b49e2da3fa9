//! Parameter validation, run before any series data is read.

use crate::{CadenceError, RawOptions, ResampleOptions};

/// Check that both options name known policies.
///
/// # Errors
/// - `InvalidParameter("frequency")` when `resampleFrequency` is missing or unknown.
/// - `InvalidParameter("function")` when `resampleFunction` is missing or unknown.
///
/// The frequency is checked first.
pub fn validate(raw: &RawOptions) -> Result<ResampleOptions, CadenceError> {
    ResampleOptions::try_from(raw).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            frequency = ?raw.resample_frequency,
            function = ?raw.resample_function,
            error = %_e,
            "rejecting resample options"
        );
    })
}
