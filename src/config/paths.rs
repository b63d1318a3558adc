//! Path management for Spendlens
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLENS_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory + `spendlens`
//!    (`~/.config/spendlens`, `~/Library/Application Support/spendlens`,
//!    `%APPDATA%\spendlens`)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SpendlensError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPENDLENS_DATA_DIR";

/// Manages all paths used by Spendlens
#[derive(Debug, Clone)]
pub struct SpendlensPaths {
    base_dir: PathBuf,
}

impl SpendlensPaths {
    /// Create a new SpendlensPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendlensError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendlensPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendlensError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendlensError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendlensError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Spendlens has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendlensError> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("spendlens"))
        .ok_or_else(|| SpendlensError::Config("Could not determine home directory".into()))
}
