//! Series normalization: raw `[dateText, value]` pairs into validated points.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::{CadenceError, Point, RawPoint};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const MAX_YEAR: i32 = 9999;

/// Parse a calendar date from text.
///
/// Accepted, after trimming surrounding whitespace:
/// - `YYYY-MM-DD` and `YYYY/MM/DD` (month and day may omit the leading zero)
/// - `YYYYMMDD`
/// - `YYYY-MM-DDTHH:MM:SS[.fff]`, also with a space instead of `T`
/// - RFC 3339 timestamps with an offset; the date is the one written, not
///   its UTC equivalent
///
/// Years must be written as plain digits and lie in `0..=9999`, so every
/// accepted date has a four-digit `YYYY-MM-DD` key; signed years are rejected.
///
/// ```
/// use cadence_core::parse_date;
/// use chrono::NaiveDate;
/// let may5 = NaiveDate::from_ymd_opt(2017, 5, 5);
/// assert_eq!(parse_date("2017-05-05"), may5);
/// assert_eq!(parse_date("2017-05-05T23:30:00-04:00"), may5);
/// assert_eq!(parse_date("2017-13-40"), None);
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    if s.starts_with(['+', '-']) {
        return None;
    }
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        return compact_date(s);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .filter(|d| (0..=MAX_YEAR).contains(&d.year()))
}

fn compact_date(s: &str) -> Option<NaiveDate> {
    let year = s.get(0..4)?.parse().ok()?;
    let month = s.get(4..6)?.parse().ok()?;
    let day = s.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Coerce a raw JSON value to a finite number.
///
/// Numbers are taken as-is and strings are parsed as decimal floats after
/// trimming. Everything else, and any non-finite result, yields `None`.
#[must_use]
pub fn coerce_value(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
    };
    v.is_finite().then_some(v)
}

fn render_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate one raw point.
///
/// # Errors
/// - `InvalidDate` with the original text when the date does not parse.
/// - `InvalidValue` with the original value when it is not a finite number.
pub fn normalize_point(raw: &RawPoint) -> Result<Point, CadenceError> {
    let date =
        parse_date(raw.date_text()).ok_or_else(|| CadenceError::invalid_date(raw.date_text()))?;
    let value =
        coerce_value(raw.value()).ok_or_else(|| CadenceError::invalid_value(render_raw(raw.value())))?;
    Ok(Point { date, value })
}

/// Validate a whole raw series, preserving input order.
///
/// All-or-nothing: the first invalid entry aborts and nothing is returned.
///
/// # Errors
/// Returns the error of the first entry that fails [`normalize_point`].
pub fn normalize(raw: &[RawPoint]) -> Result<Vec<Point>, CadenceError> {
    raw.iter()
        .enumerate()
        .map(|(_idx, p)| {
            normalize_point(p).inspect_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::debug!(index = _idx, error = %_e, "rejecting series entry");
            })
        })
        .collect()
}
