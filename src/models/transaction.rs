//! Transaction model
//!
//! Transactions are owned by an external store and handed to the analytics
//! core read-only. Amounts are always non-negative; the direction of money
//! is carried by [`TransactionType`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Largest amount a single transaction may carry, in minor units
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000_000);

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received (salary, freelance work, ...)
    Income,
    /// Money spent
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Display label, e.g. "Taco Bell"
    #[serde(default)]
    pub name: String,

    /// Amount in minor units, never negative
    pub amount: Money,

    /// Free-form for expenses, a small vocabulary (SALARY, OTHER) for income
    pub category: String,

    /// Calendar date of the transaction
    pub date: NaiveDate,
}

impl Transaction {
    /// Create an expense transaction
    pub fn expense(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionType::Expense,
            name: name.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Create an income transaction
    pub fn income(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionType::Income,
            ..Self::expense(name, amount, category, date)
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.name,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Transaction amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
            Self::MissingCategory => write!(f, "Transaction category must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
