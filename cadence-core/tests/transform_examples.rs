use cadence_core::{
    CadenceConfig, CadenceError, KeyOrder, RawOptions, RawPoint, ResultPoint, resample_json,
    resample_series,
};

fn sample() -> Vec<RawPoint> {
    vec![
        RawPoint::new("2017-05-05", 22.5),
        RawPoint::new("2017-05-20", 10.0),
        RawPoint::new("2017-10-10", 44.5),
    ]
}

fn opts(frequency: &str, function: &str) -> RawOptions {
    RawOptions::new(Some(frequency), Some(function))
}

#[test]
fn month_end_sum_gives_two_groups() {
    let out = resample_series(&sample(), &opts("monthEnd", "sum"), &CadenceConfig::default())
        .expect("resample");
    assert_eq!(out.len(), 2);
    assert!(out.contains(&ResultPoint("2017-05-31".into(), 32.5)));
    assert!(out.contains(&ResultPoint("2017-10-31".into(), 44.5)));
}

#[test]
fn year_end_max_gives_single_point() {
    let out = resample_series(&sample(), &opts("yearEnd", "max"), &CadenceConfig::default())
        .expect("resample");
    assert_eq!(out, vec![ResultPoint("2017-12-31".into(), 44.5)]);
}

#[test]
fn quarter_end_min() {
    let out = resample_series(&sample(), &opts("quarterEnd", "min"), &CadenceConfig::default())
        .expect("resample");
    assert_eq!(
        out,
        vec![
            ResultPoint("2017-06-30".into(), 10.0),
            ResultPoint("2017-12-31".into(), 44.5),
        ]
    );
}

#[test]
fn unknown_frequency_fails_before_reading_data() {
    // The series is malformed too; the parameter error must win.
    let raw = vec![RawPoint::new("2017-13-40", "abc")];
    let err = resample_series(&raw, &opts("dayEnd", "sum"), &CadenceConfig::default())
        .unwrap_err();
    assert_eq!(err, CadenceError::invalid_parameter("frequency"));
}

#[test]
fn missing_function_fails() {
    let raw_opts = RawOptions::new(Some("monthEnd"), None);
    let err = resample_series(&sample(), &raw_opts, &CadenceConfig::default()).unwrap_err();
    assert_eq!(err, CadenceError::invalid_parameter("function"));
}

#[test]
fn malformed_date_fails_at_any_position() {
    for pos in 0..=3 {
        let mut raw = sample();
        raw.insert(pos, RawPoint::new("2017-13-40", 5));
        let err = resample_series(&raw, &opts("monthEnd", "sum"), &CadenceConfig::default())
            .unwrap_err();
        assert_eq!(err, CadenceError::invalid_date("2017-13-40"), "position {pos}");
    }
}

#[test]
fn non_numeric_value_fails() {
    let raw = vec![RawPoint::new("2017-05-05", "abc")];
    let err = resample_series(&raw, &opts("monthEnd", "sum"), &CadenceConfig::default())
        .unwrap_err();
    assert_eq!(err, CadenceError::invalid_value("abc"));
    assert_eq!(err.message(), "invalid value: abc");
}

#[test]
fn numeric_strings_are_accepted() {
    let raw = vec![
        RawPoint::new("2017-05-05", "1.5"),
        RawPoint::new("2017-05-06", 2),
    ];
    let out = resample_series(&raw, &opts("monthEnd", "sum"), &CadenceConfig::default())
        .expect("resample");
    assert_eq!(out, vec![ResultPoint("2017-05-31".into(), 3.5)]);
}

#[test]
fn json_body_roundtrip() {
    let body = r#"[["2017-10-10", 44.5], ["2017-05-05", 22.5], ["2017-05-20", 10.0]]"#;
    let cfg = CadenceConfig {
        key_order: KeyOrder::Chronological,
        ..CadenceConfig::default()
    };
    let out = resample_json(body, &opts("monthEnd", "sum"), &cfg).expect("resample");
    let json = serde_json::to_string(&out).expect("serialize");
    assert_eq!(json, r#"[["2017-05-31",32.5],["2017-10-31",44.5]]"#);
}

#[test]
fn json_body_errors() {
    let cfg = CadenceConfig::default();
    let err = resample_json(r#"{"not": "a series"}"#, &opts("monthEnd", "sum"), &cfg)
        .unwrap_err();
    assert!(matches!(err, CadenceError::InvalidBody(_)));

    // Options are checked before the body is parsed.
    let err = resample_json("not json", &opts("monthEnd", "avg"), &cfg).unwrap_err();
    assert_eq!(err, CadenceError::invalid_parameter("function"));
}

#[test]
fn signed_years_are_invalid_dates() {
    for text in ["-0001-05-05", "+2017-05-05"] {
        let raw = vec![RawPoint::new(text, 1.0)];
        let err = resample_series(&raw, &opts("monthEnd", "sum"), &CadenceConfig::default())
            .unwrap_err();
        assert_eq!(err, CadenceError::invalid_date(text));
    }
}

#[test]
fn json_body_entries_are_normalized() {
    let cfg = CadenceConfig::default();
    let err = resample_json(
        r#"[["2017-05-05", 1], ["2017-13-40", 2]]"#,
        &opts("weekEnd", "min"),
        &cfg,
    )
    .unwrap_err();
    assert_eq!(err, CadenceError::invalid_date("2017-13-40"));

    let out = resample_json(r#"[["2017-05-05", "4"]]"#, &opts("weekEnd", "min"), &cfg)
        .expect("resample");
    assert_eq!(out, vec![ResultPoint("2017-05-07".into(), 4.0)]);
}
