use cadence::{CadenceError, RawOptions, RawPoint};

/// Irregular daily series spanning two quarters of 2017.
#[must_use]
pub fn sample_series() -> Vec<RawPoint> {
    vec![
        RawPoint::new("2017-05-05", 22.5),
        RawPoint::new("2017-05-20", 10.0),
        RawPoint::new("2017-06-02", "17.25"),
        RawPoint::new("2017-07-14", 3.0),
        RawPoint::new("2017-10-10", 44.5),
    ]
}

/// Read `resampleFrequency` / `resampleFunction` from a URL query string.
///
/// Unrelated keys are ignored; a repeated key keeps its last value.
#[must_use]
pub fn options_from_query(query: &str) -> RawOptions {
    let mut opts = RawOptions::default();
    for (k, v) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match k.as_ref() {
            "resampleFrequency" => opts.resample_frequency = Some(v.into_owned()),
            "resampleFunction" => opts.resample_function = Some(v.into_owned()),
            _ => {}
        }
    }
    opts
}

/// Map a transform outcome to an HTTP-like `(status, body)` pair.
///
/// Every transform error is a client error, so failures become `400`.
#[must_use]
pub fn to_response<T: serde::Serialize>(outcome: Result<T, CadenceError>) -> (u16, String) {
    match outcome {
        Ok(data) => match serde_json::to_value(data) {
            Ok(data) => (200, serde_json::json!({ "data": data }).to_string()),
            Err(e) => (500, serde_json::json!({ "error": e.to_string() }).to_string()),
        },
        Err(e) => (400, serde_json::json!({ "error": e.message() }).to_string()),
    }
}
