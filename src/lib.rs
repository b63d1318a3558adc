//! Spendlens - transaction analytics for personal finance
//!
//! This library turns a list of income and expense transactions into the
//! numbers behind an analytics screen: the date interval a period selection
//! covers, income and expense totals, a per-category spending breakdown, and
//! the pie chart sectors for that breakdown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, transactions, periods, intervals, colors)
//! - `services`: Period resolution and transaction filtering
//! - `reports`: Aggregation, chart geometry, and the cached report pipeline
//! - `storage`: JSON transaction source
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers for the `spendlens` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendlens::models::{Money, PeriodSelection, Transaction};
//! use spendlens::reports::{AnalyticsReport, CategoryPalette};
//!
//! let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
//! let transactions = vec![
//!     Transaction::expense("Lunch", Money::from_cents(100), "Food", day),
//!     Transaction::expense("Dinner", Money::from_cents(300), "Food", day),
//! ];
//!
//! let report = AnalyticsReport::generate(
//!     &transactions,
//!     NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
//!     &PeriodSelection::Monthly,
//!     &CategoryPalette::standard(),
//! )?;
//!
//! assert_eq!(report.summary.expense_total, Money::from_cents(400));
//! assert_eq!(report.summary.categories[0].percent, 100);
//! # Ok::<(), spendlens::SpendlensError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendlensError, SpendlensResult};
