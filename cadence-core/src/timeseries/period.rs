use chrono::{Datelike, Days, Months, NaiveDate};

use crate::{FrequencyKind, WeekStart};

/// Last calendar day of the month containing `date`.
///
/// Dates in the final representable month resolve to `NaiveDate::MAX`.
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Last day of the week containing `date` under the given week convention.
///
/// Weeks that would end past `NaiveDate::MAX` are clamped to it.
#[must_use]
pub fn week_end(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let into_week = match week_start {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    };
    date.checked_add_days(Days::new(u64::from(6 - into_week)))
        .unwrap_or(NaiveDate::MAX)
}

/// Last calendar day of the quarter containing `date`.
#[must_use]
pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    let last_month = (date.month0() / 3 + 1) * 3;
    NaiveDate::from_ymd_opt(date.year(), last_month, 1).map_or(NaiveDate::MAX, month_end)
}

/// December 31 of the year containing `date`.
#[must_use]
pub fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Latest period end with a four-digit `YYYY-MM-DD` key.
#[must_use]
pub fn last_key_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Canonical end-of-period date of `date` for the given frequency.
///
/// Total over every representable date. Ends past `9999-12-31` (only the
/// last week of year 9999 can reach one from a parsed date) are clamped to
/// it so the key keeps the `YYYY-MM-DD` shape.
#[must_use]
pub fn resolve_period_end(
    date: NaiveDate,
    frequency: FrequencyKind,
    week_start: WeekStart,
) -> NaiveDate {
    let end = match frequency {
        FrequencyKind::MonthEnd => month_end(date),
        FrequencyKind::WeekEnd => week_end(date, week_start),
        FrequencyKind::QuarterEnd => quarter_end(date),
        FrequencyKind::YearEnd => year_end(date),
    };
    if date <= last_key_date() {
        end.min(last_key_date())
    } else {
        end
    }
}

/// Format a period end as its grouping key (`YYYY-MM-DD`).
///
/// Two observations share a period exactly when their keys are equal.
#[must_use]
pub fn period_key(end: NaiveDate) -> String {
    end.format("%Y-%m-%d").to_string()
}
