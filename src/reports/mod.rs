//! Reports module for Spendlens
//!
//! Spending totals, the category breakdown, pie chart geometry and the
//! combined analytics report built from them.

pub mod analytics;
pub mod cache;
pub mod chart;
pub mod palette;
pub mod summary;

pub use analytics::AnalyticsReport;
pub use cache::ReportCache;
pub use chart::{pie_sectors, PieSector};
pub use palette::{CategoryPalette, DEFAULT_CATEGORY_COLOR, PLACEHOLDER_COLOR};
pub use summary::{percent_of, CategoryShare, SpendingSummary};
