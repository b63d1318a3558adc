//! Core data models for Spendlens
//!
//! Transactions as handed over by the external store, the period a user
//! selects, and the value types the analytics pipeline passes between stages.

pub mod color;
pub mod ids;
pub mod interval;
pub mod money;
pub mod period;
pub mod transaction;

pub use color::{Color, ColorParseError};
pub use ids::TransactionId;
pub use interval::DateInterval;
pub use money::Money;
pub use period::{PeriodParseError, PeriodSelection};
pub use transaction::{Transaction, TransactionType, TransactionValidationError, MAX_AMOUNT};
