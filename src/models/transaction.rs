//! Transaction model
//!
//! A transaction is immutable once created. The ledger only ever appends or
//! removes whole transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::TransactionCategory;
use super::ids::TransactionId;
use super::money::Money;

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// What the money was for, e.g. "Coffee Shop"
    pub title: String,

    /// Positive for income, negative for spending
    pub amount: Money,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    pub category: TransactionCategory,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        date: DateTime<Utc>,
        category: TransactionCategory,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            amount,
            date,
            category,
        }
    }

    pub fn is_inflow(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }

    /// Screen-reader summary, e.g. "Coffee Shop, spent $4.50"
    pub fn accessibility_label(&self) -> String {
        let verb = if self.amount.cents() >= 0 {
            "received"
        } else {
            "spent"
        };
        format!("{}, {} {}", self.title, verb, self.amount.abs())
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Transaction title cannot be empty")]
    EmptyTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Transaction {
        Transaction::new(
            "Coffee Shop",
            Money::from_cents(-450),
            Utc::now(),
            TransactionCategory::Food,
        )
    }

    #[test]
    fn test_new_transaction() {
        let txn = coffee();
        assert_eq!(txn.title, "Coffee Shop");
        assert!(txn.is_outflow());
        assert!(!txn.is_inflow());
    }

    #[test]
    fn test_accessibility_label() {
        assert_eq!(coffee().accessibility_label(), "Coffee Shop, spent $4.50");

        let salary = Transaction::new(
            "Salary",
            Money::from_cents(250000),
            Utc::now(),
            TransactionCategory::Income,
        );
        assert_eq!(salary.accessibility_label(), "Salary, received $2500.00");
    }

    #[test]
    fn test_validation() {
        assert!(coffee().validate().is_ok());

        let mut blank = coffee();
        blank.title = "   ".into();
        assert_eq!(blank.validate(), Err(TransactionValidationError::EmptyTitle));
    }

    #[test]
    fn test_serialization() {
        let txn = coffee();
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
        assert!(json.contains("\"category\":\"food\""));
    }
}
