//! Configuration module for Spendlens
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendlensPaths;
pub use settings::{DefaultPeriod, Settings};
