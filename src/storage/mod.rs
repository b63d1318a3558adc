//! Storage layer for Spendlens
//!
//! The analytics core never touches the filesystem. This layer loads the
//! transaction list the CLI hands to it.

pub mod file_io;
pub mod transactions;

pub use transactions::TransactionFile;
