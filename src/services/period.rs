//! Period resolution
//!
//! Turns a [`PeriodSelection`] into a concrete [`DateInterval`] relative to a
//! caller-supplied reference date. The clock is never read here.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::SpendlensResult;
use crate::models::{DateInterval, PeriodSelection};

/// Days covered by the weekly preset before the reference date
pub const WEEKLY_LOOKBACK_DAYS: u64 = 7;

/// Resolve a period selection against the reference date `now`
///
/// - `Weekly`: `[now - 7 days, now]`
/// - `Monthly`: first through last day of `now`'s month
/// - `Annually`: January 1 through December 31 of `now`'s year
/// - `Custom`: the given bounds
///
/// # Errors
///
/// Returns [`crate::SpendlensError::InvalidRange`] when a custom range starts
/// after it ends.
pub fn resolve_period(now: NaiveDate, selection: &PeriodSelection) -> SpendlensResult<DateInterval> {
    let (start, end) = match *selection {
        PeriodSelection::Weekly => (
            now.checked_sub_days(Days::new(WEEKLY_LOOKBACK_DAYS))
                .unwrap_or(NaiveDate::MIN),
            now,
        ),
        PeriodSelection::Monthly => (first_of_month(now), last_of_month(now)),
        PeriodSelection::Annually => (
            NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap_or(NaiveDate::MIN),
            NaiveDate::from_ymd_opt(now.year(), 12, 31).unwrap_or(NaiveDate::MAX),
        ),
        PeriodSelection::Custom { start, end } => (start, end),
    };

    let interval = DateInterval::new(start, end)?;
    tracing::debug!(%selection, %now, %interval, "resolved period");
    Ok(interval)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
