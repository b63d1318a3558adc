//! Analytics report
//!
//! Runs the whole pipeline for one period: resolve the period, filter the
//! transactions, aggregate them and lay out the pie chart.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::SpendlensResult;
use crate::models::{DateInterval, PeriodSelection, Transaction};
use crate::reports::chart::{pie_sectors, PieSector};
use crate::reports::palette::CategoryPalette;
use crate::reports::summary::SpendingSummary;
use crate::services::{filter_by_interval, resolve_period};

/// Everything the analytics screen shows for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    /// The period the user selected
    pub period: PeriodSelection,
    /// The dates the period resolved to
    pub interval: DateInterval,
    /// Totals and category breakdown
    pub summary: SpendingSummary,
    /// Pie chart sectors, one per category or a single placeholder
    pub sectors: Vec<PieSector>,
}

impl AnalyticsReport {
    /// Generate a report for `period`, resolved against the reference date `now`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SpendlensError::InvalidRange`] when a custom period
    /// starts after it ends.
    pub fn generate(
        transactions: &[Transaction],
        now: NaiveDate,
        period: &PeriodSelection,
        palette: &CategoryPalette,
    ) -> SpendlensResult<Self> {
        let interval = resolve_period(now, period)?;
        Ok(Self::for_interval(transactions, *period, interval, palette))
    }

    /// Generate a report for an already resolved interval
    pub fn for_interval(
        transactions: &[Transaction],
        period: PeriodSelection,
        interval: DateInterval,
        palette: &CategoryPalette,
    ) -> Self {
        let summary = SpendingSummary::generate(filter_by_interval(transactions, &interval), palette);
        let sectors = pie_sectors(&summary.categories);

        Self {
            period,
            interval,
            summary,
            sectors,
        }
    }
}
