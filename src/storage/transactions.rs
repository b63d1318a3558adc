//! Read-only transaction source
//!
//! Stands in for the external document store: a `transactions.json` file in
//! the same layout the store exports. Records are validated on load; the
//! analytics core only ever sees the resulting list.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// A JSON file of transactions
#[derive(Debug, Clone)]
pub struct TransactionFile {
    path: PathBuf,
}

impl TransactionFile {
    /// Point at a transaction file; nothing is read until [`Self::load`]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate every transaction
    ///
    /// A missing file is an empty transaction list.
    pub fn load(&self) -> SpendlensResult<Vec<Transaction>> {
        let data: TransactionData = read_json(&self.path)?;

        for txn in &data.transactions {
            txn.validate().map_err(|e| {
                SpendlensError::Validation(format!("Transaction {} ({}): {}", txn.id, txn.name, e))
            })?;
        }

        tracing::debug!(
            path = %self.path.display(),
            count = data.transactions.len(),
            "loaded transactions"
        );
        Ok(data.transactions)
    }

    /// Write an empty transaction file unless one already exists
    pub fn initialize(&self) -> SpendlensResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        write_json_atomic(&self.path, &TransactionData::default())?;
        Ok(true)
    }

    /// Replace the file's contents; used by tooling and tests, never by the core
    pub fn save(&self, transactions: &[Transaction]) -> SpendlensResult<()> {
        let data = TransactionData {
            transactions: transactions.to_vec(),
        };
        write_json_atomic(&self.path, &data)
    }
}
