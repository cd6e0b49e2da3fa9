use std::collections::HashMap;

use chrono::NaiveDate;

use super::aggregate::aggregate_group;
use super::period::{period_key, resolve_period_end};
use crate::{AggregationKind, CadenceConfig, FrequencyKind, KeyOrder, Point, ResultPoint};

/// Values observed for one period, in input order; never empty.
struct PeriodGroup {
    end: NaiveDate,
    key: String,
    first: f64,
    rest: Vec<f64>,
}

/// Generic resampler that assigns each point to a period with `bucket_of`,
/// groups by the formatted period key and reduces each group with `function`.
fn resample_by<F>(
    points: &[Point],
    function: AggregationKind,
    key_order: KeyOrder,
    bucket_of: F,
) -> Vec<ResultPoint>
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    if points.is_empty() {
        return Vec::new();
    }

    // Period assignment.
    let keyed: Vec<(NaiveDate, f64)> = points
        .iter()
        .map(|p| (bucket_of(p.date), p.value))
        .collect();

    // Grouping keeps first-appearance order of keys.
    let mut slot_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<PeriodGroup> = Vec::new();
    for (end, value) in keyed {
        let key = period_key(end);
        if let Some(&slot) = slot_of.get(&key) {
            groups[slot].rest.push(value);
        } else {
            slot_of.insert(key.clone(), groups.len());
            groups.push(PeriodGroup {
                end,
                key,
                first: value,
                rest: Vec::new(),
            });
        }
    }

    if key_order == KeyOrder::Chronological {
        groups.sort_by_key(|g| g.end);
    }

    groups
        .into_iter()
        .map(|g| ResultPoint(g.key, aggregate_group(function, g.first, &g.rest)))
        .collect()
}

/// Resample validated points to `frequency`, reducing each period with `function`.
///
/// - Every point is moved to the end date of its period (see
///   [`resolve_period_end`]); points whose period keys are equal form one group.
/// - Each group yields exactly one `ResultPoint`; periods without observations
///   do not appear.
/// - Output order follows `config.key_order`: first appearance of each key by
///   default, or ascending period end when `Chronological`.
///
/// ```
/// use cadence_core::{AggregationKind, CadenceConfig, FrequencyKind, Point, ResultPoint, resample};
/// use chrono::NaiveDate;
/// let p = |m, d, v| Point { date: NaiveDate::from_ymd_opt(2017, m, d).unwrap(), value: v };
/// let out = resample(
///     &[p(5, 5, 22.5), p(5, 20, 10.0), p(10, 10, 44.5)],
///     FrequencyKind::MonthEnd,
///     AggregationKind::Sum,
///     &CadenceConfig::default(),
/// );
/// assert_eq!(out, vec![ResultPoint("2017-05-31".into(), 32.5), ResultPoint("2017-10-31".into(), 44.5)]);
/// ```
#[must_use]
pub fn resample(
    points: &[Point],
    frequency: FrequencyKind,
    function: AggregationKind,
    config: &CadenceConfig,
) -> Vec<ResultPoint> {
    let week_start = config.week_start;
    resample_by(points, function, config.key_order, move |date| {
        resolve_period_end(date, frequency, week_start)
    })
}
