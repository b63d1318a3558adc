//! Report memoization
//!
//! Reports are pure functions of their inputs, so a caller that re-renders
//! often can keep them in a [`ReportCache`]. Entries are keyed on the
//! caller's transaction-set version, the selected period and the interval it
//! resolved to; bumping the version whenever the transactions change is the
//! caller's responsibility.

use chrono::NaiveDate;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::SpendlensResult;
use crate::models::{DateInterval, PeriodSelection, Transaction};
use crate::reports::analytics::AnalyticsReport;
use crate::reports::palette::CategoryPalette;
use crate::services::resolve_period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    version: u64,
    period: PeriodSelection,
    interval: DateInterval,
}

/// Memoizes [`AnalyticsReport`]s generated with one palette
#[derive(Debug)]
pub struct ReportCache {
    palette: CategoryPalette,
    entries: HashMap<CacheKey, AnalyticsReport>,
    hits: u64,
    misses: u64,
}

impl ReportCache {
    /// Create an empty cache whose reports are colored with `palette`
    pub fn new(palette: CategoryPalette) -> Self {
        Self {
            palette,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached report for these inputs, generating it on a miss
    ///
    /// The period is always resolved first, so a preset period yields a new
    /// entry once `now` moves into a different window. Errors are returned
    /// without touching the cache.
    pub fn get_or_generate(
        &mut self,
        version: u64,
        transactions: &[Transaction],
        now: NaiveDate,
        period: &PeriodSelection,
    ) -> SpendlensResult<&AnalyticsReport> {
        let interval = resolve_period(now, period)?;
        let key = CacheKey {
            version,
            period: *period,
            interval,
        };

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                tracing::trace!(version, %period, %interval, "report cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                tracing::trace!(version, %period, %interval, "report cache miss");
                let report =
                    AnalyticsReport::for_interval(transactions, *period, interval, &self.palette);
                Ok(entry.insert(report))
            }
        }
    }

    /// Drop entries computed for any version other than `current_version`
    pub fn evict_stale(&mut self, current_version: u64) {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.version == current_version);
        tracing::debug!(
            evicted = before - self.entries.len(),
            current_version,
            "evicted stale reports"
        );
    }

    /// Remove every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of cached reports
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no reports
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that generated a new report
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new(CategoryPalette::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::expense("Uber", Money::from_cents(450), "Transport", date(2026, 2, 3)),
            Transaction::expense("Zara", Money::from_cents(3500), "Shopping", date(2026, 2, 10)),
        ]
    }

    #[test]
    fn test_hit_returns_identical_report() {
        let mut cache = ReportCache::default();
        let txns = transactions();
        let now = date(2026, 2, 15);

        let first = cache
            .get_or_generate(1, &txns, now, &PeriodSelection::Monthly)
            .unwrap()
            .clone();
        let second = cache
            .get_or_generate(1, &txns, now, &PeriodSelection::Monthly)
            .unwrap()
            .clone();

        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_same_window_different_day_is_a_hit() {
        let mut cache = ReportCache::default();
        let txns = transactions();

        cache
            .get_or_generate(1, &txns, date(2026, 2, 15), &PeriodSelection::Monthly)
            .unwrap();
        cache
            .get_or_generate(1, &txns, date(2026, 2, 20), &PeriodSelection::Monthly)
            .unwrap();
        cache
            .get_or_generate(1, &txns, date(2026, 3, 1), &PeriodSelection::Monthly)
            .unwrap();

        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_new_version_recomputes() {
        let mut cache = ReportCache::default();
        let mut txns = transactions();
        let now = date(2026, 2, 15);

        let before = cache
            .get_or_generate(1, &txns, now, &PeriodSelection::Monthly)
            .unwrap()
            .summary
            .expense_total;

        txns.push(Transaction::expense("Movie", Money::from_cents(800), "Entertainment", date(2026, 2, 12)));
        let after = cache
            .get_or_generate(2, &txns, now, &PeriodSelection::Monthly)
            .unwrap()
            .summary
            .expense_total;

        assert_eq!(before.cents(), 3950);
        assert_eq!(after.cents(), 4750);

        cache.evict_stale(2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache = ReportCache::default();
        let period = PeriodSelection::custom(date(2026, 3, 10), date(2026, 3, 1));

        let result = cache.get_or_generate(1, &transactions(), date(2026, 3, 15), &period);

        assert!(result.unwrap_err().is_invalid_range());
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cache = ReportCache::default();
        cache
            .get_or_generate(1, &transactions(), date(2026, 2, 15), &PeriodSelection::Weekly)
            .unwrap();

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }
}
