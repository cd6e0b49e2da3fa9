use crate::AggregationKind;

/// Reduce one non-empty period, given as its first value and the rest.
///
/// Total by construction: a period always holds at least one observation.
/// `sum` is not checked for overflow; finite inputs whose total exceeds
/// `f64::MAX` yield `±inf`, which `serde_json` writes as `null`.
#[must_use]
pub fn aggregate_group(kind: AggregationKind, first: f64, rest: &[f64]) -> f64 {
    let values = rest.iter().copied();
    match kind {
        AggregationKind::Min => values.fold(first, f64::min),
        AggregationKind::Max => values.fold(first, f64::max),
        AggregationKind::Sum => values.fold(first, |acc, v| acc + v),
    }
}

/// Reduce the values of one period with the given aggregation.
///
/// Returns `None` only for `min`/`max` over an empty slice; the sum of an
/// empty slice is `0.0`. Every aggregation here is insensitive to the order
/// of `values`, and any new one must be as well, since values inside a
/// period arrive in input order. Overflow behaves as in [`aggregate_group`].
///
/// ```
/// use cadence_core::{AggregationKind, aggregate};
/// assert_eq!(aggregate(AggregationKind::Sum, &[22.5, 10.0]), Some(32.5));
/// assert_eq!(aggregate(AggregationKind::Max, &[22.5, 10.0]), Some(22.5));
/// assert_eq!(aggregate(AggregationKind::Min, &[]), None);
/// ```
#[must_use]
pub fn aggregate(kind: AggregationKind, values: &[f64]) -> Option<f64> {
    match values.split_first() {
        Some((&first, rest)) => Some(aggregate_group(kind, first, rest)),
        None => (kind == AggregationKind::Sum).then_some(0.0),
    }
}
