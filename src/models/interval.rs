//! Closed calendar date intervals

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::{SpendlensError, SpendlensResult};

/// A closed range of calendar dates `[start, end]`
///
/// The only constructor checks `start <= end`, so every value in circulation
/// is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Create an interval, failing with [`SpendlensError::InvalidRange`] when
    /// `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> SpendlensResult<Self> {
        if start > end {
            return Err(SpendlensError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// An interval covering exactly one day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the interval (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the interval (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within the interval, both bounds inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both bounds
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
