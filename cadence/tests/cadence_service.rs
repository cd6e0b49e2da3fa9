use cadence::{
    AggregationKind, Cadence, CadenceConfig, CadenceError, FrequencyKind, KeyOrder, Point,
    RawOptions, RawPoint, ResampleOptions, ResultPoint, WeekStart,
};
use chrono::NaiveDate;
use std::sync::Arc;

fn opts(frequency: &str, function: &str) -> RawOptions {
    RawOptions::new(Some(frequency), Some(function))
}

#[test]
fn default_weeks_end_on_sunday() {
    // Friday, Saturday, Sunday, then Monday of the following week.
    let series = vec![
        RawPoint::new("2017-05-05", 1.0),
        RawPoint::new("2017-05-06", 2.0),
        RawPoint::new("2017-05-07", 3.0),
        RawPoint::new("2017-05-08", 4.0),
    ];
    let out = Cadence::builder()
        .build()
        .resample_series(&series, &opts("weekEnd", "sum"))
        .expect("resample");
    assert_eq!(
        out,
        vec![
            ResultPoint("2017-05-07".into(), 6.0),
            ResultPoint("2017-05-14".into(), 4.0),
        ]
    );
}

#[test]
fn sunday_start_weeks_end_on_saturday() {
    let series = vec![
        RawPoint::new("2017-05-05", 1.0),
        RawPoint::new("2017-05-06", 2.0),
        RawPoint::new("2017-05-07", 3.0),
    ];
    let out = Cadence::builder()
        .week_start(WeekStart::Sunday)
        .build()
        .resample_series(&series, &opts("weekEnd", "max"))
        .expect("resample");
    assert_eq!(
        out,
        vec![
            ResultPoint("2017-05-06".into(), 2.0),
            ResultPoint("2017-05-13".into(), 3.0),
        ]
    );
}

#[test]
fn builder_config_replaces_everything() {
    let cfg = CadenceConfig {
        week_start: WeekStart::Sunday,
        key_order: KeyOrder::Chronological,
    };
    let cadence = Cadence::builder().config(cfg).build();
    assert_eq!(cadence.config(), &cfg);
    assert_eq!(Cadence::default().config(), &CadenceConfig::default());
}

#[test]
fn chronological_output_from_json() {
    let cadence = Cadence::builder().key_order(KeyOrder::Chronological).build();
    let body = r#"[["2018-02-01", 1], ["2017-01-15", "2.5"], ["2018-01-31", 3]]"#;
    let out = cadence
        .resample_json(body, &opts("monthEnd", "sum"))
        .expect("resample");
    let json = serde_json::to_value(&out).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([["2017-01-31", 2.5], ["2018-01-31", 3.0], ["2018-02-28", 1.0]])
    );
}

#[test]
fn errors_surface_verbatim() {
    let cadence = Cadence::builder().build();
    let err = cadence
        .resample_series(&[], &opts("dayEnd", "sum"))
        .unwrap_err();
    assert_eq!(err.message(), "invalid parameter: frequency");

    let err = cadence
        .resample_series(&[RawPoint::new("2017-13-40", 5)], &opts("monthEnd", "sum"))
        .unwrap_err();
    assert_eq!(err, CadenceError::invalid_date("2017-13-40"));
}

#[test]
fn typed_points_skip_validation() {
    let cadence = Cadence::builder().build();
    let typed = cadence.validate(&opts("yearEnd", "min")).expect("valid");
    assert_eq!(
        typed,
        ResampleOptions::new(FrequencyKind::YearEnd, AggregationKind::Min)
    );
    let p = |m, d, value| Point {
        date: NaiveDate::from_ymd_opt(2017, m, d).unwrap(),
        value,
    };
    let out = cadence.resample_points(&[p(1, 1, 3.0), p(12, 31, -1.0)], typed);
    assert_eq!(out, vec![ResultPoint("2017-12-31".into(), -1.0)]);
}

#[test]
fn shared_across_threads() {
    let cadence = Arc::new(Cadence::builder().build());
    let handles: Vec<_> = (0u8..4)
        .map(|i| {
            let cadence = Arc::clone(&cadence);
            std::thread::spawn(move || {
                let series = vec![
                    RawPoint::new("2017-05-05", f64::from(i)),
                    RawPoint::new("2017-06-05", 1.0),
                ];
                cadence.resample_series(&series, &opts("quarterEnd", "sum"))
            })
        })
        .collect();
    for (i, h) in (0u8..4).zip(handles) {
        let out = h.join().expect("thread").expect("resample");
        let expected = f64::from(i) + 1.0;
        assert_eq!(out, vec![ResultPoint("2017-06-30".into(), expected)]);
    }
}
