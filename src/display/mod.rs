//! Display formatting for terminal output
//!
//! Turns analytics reports into text for the CLI.

pub mod report;

pub use report::{format_sectors, format_summary};
