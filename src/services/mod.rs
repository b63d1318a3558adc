//! Pipeline stages for Spendlens
//!
//! Pure functions that turn a period selection into a date interval and
//! narrow a transaction list down to that interval.

pub mod filter;
pub mod period;

pub use filter::filter_by_interval;
pub use period::{resolve_period, WEEKLY_LOOKBACK_DAYS};
