//! Period selection
//!
//! The caller's choice of time window for analytics: one of three presets
//! anchored on a reference date, or an explicit custom range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a period selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PeriodSelection {
    /// The seven days before the reference date, through the reference date
    Weekly,

    /// The calendar month containing the reference date
    Monthly,

    /// The calendar year containing the reference date
    Annually,

    /// Explicit date range; bounds are checked when the period is resolved
    Custom { start: NaiveDate, end: NaiveDate },
}

impl PeriodSelection {
    /// Create a custom period
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Custom { start, end }
    }

    /// Check if this is a custom range
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Presets: "weekly", "monthly", "annually" (also "week", "month",
    ///   "year", "yearly")
    /// - Custom: "2026-02-01..2026-02-15"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once("..") {
            let start = parse_date(start.trim())?;
            let end = parse_date(end.trim())?;
            return Ok(Self::Custom { start, end });
        }

        match s.to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "annually" | "annual" | "yearly" | "year" => Ok(Self::Annually),
            _ => Err(PeriodParseError::InvalidFormat(s.to_string())),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, PeriodParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| PeriodParseError::InvalidDate(s.to_string()))
}

impl fmt::Display for PeriodSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Annually => write!(f, "annually"),
            Self::Custom { start, end } => {
                write!(
                    f,
                    "{}..{}",
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                )
            }
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidDate(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidDate(s) => {
                write!(f, "Invalid date: {} (expected YYYY-MM-DD)", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}
