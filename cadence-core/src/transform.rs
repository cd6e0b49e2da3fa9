//! The single public transform: validate, normalize, resample.

use crate::normalize::normalize;
use crate::timeseries::resample::resample;
use crate::validate::validate;
use crate::{CadenceConfig, CadenceError, RawOptions, RawPoint, ResampleOptions, ResultPoint};

/// Resample a raw series according to raw options.
///
/// Stages run strictly in order: options are validated before the series is
/// touched, then the series is normalized, then resampled. The first error
/// aborts the call; there are no partial results.
///
/// # Errors
/// - `InvalidParameter` for a missing or unknown frequency/function.
/// - `InvalidDate` / `InvalidValue` for the first malformed series entry.
///
/// ```
/// use cadence_core::{CadenceConfig, RawOptions, RawPoint, ResultPoint, resample_series};
/// let raw = vec![
///     RawPoint::new("2017-05-05", 22.5),
///     RawPoint::new("2017-05-20", 10.0),
///     RawPoint::new("2017-10-10", 44.5),
/// ];
/// let opts = RawOptions::new(Some("yearEnd"), Some("max"));
/// let out = resample_series(&raw, &opts, &CadenceConfig::default()).unwrap();
/// assert_eq!(out, vec![ResultPoint("2017-12-31".into(), 44.5)]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "cadence_core::transform::resample_series",
        skip(raw, options, config),
        fields(points = raw.len()),
    )
)]
pub fn resample_series(
    raw: &[RawPoint],
    options: &RawOptions,
    config: &CadenceConfig,
) -> Result<Vec<ResultPoint>, CadenceError> {
    let opts = validate(options)?;
    resample_validated(raw, opts, config)
}

/// Normalize and resample a series under options that already passed validation.
fn resample_validated(
    raw: &[RawPoint],
    opts: ResampleOptions,
    config: &CadenceConfig,
) -> Result<Vec<ResultPoint>, CadenceError> {
    let points = normalize(raw)?;
    let out = resample(&points, opts.frequency, opts.function, config);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        frequency = %opts.frequency,
        function = %opts.function,
        periods = out.len(),
        "resampled series"
    );
    Ok(out)
}

/// Resample a JSON body (`[[dateText, value], ...]`) according to raw options.
///
/// Options are validated before the body is parsed.
///
/// # Errors
/// - `InvalidParameter` as for [`resample_series`], checked first.
/// - `InvalidBody` when the body is not a JSON array of `[string, value]` pairs.
/// - `InvalidDate` / `InvalidValue` for the first malformed entry.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "cadence_core::transform::resample_json",
        skip(body, options, config),
        fields(body_len = body.len()),
    )
)]
pub fn resample_json(
    body: &str,
    options: &RawOptions,
    config: &CadenceConfig,
) -> Result<Vec<ResultPoint>, CadenceError> {
    let opts = validate(options)?;
    let raw: Vec<RawPoint> =
        serde_json::from_str(body).map_err(|e| CadenceError::InvalidBody(e.to_string()))?;
    resample_validated(&raw, opts, config)
}
