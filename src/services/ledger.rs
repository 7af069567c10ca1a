//! Ledger service
//!
//! Records and deletes transactions with validation and audit logging.

use chrono::{DateTime, Utc};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{WalletError, WalletResult};
use crate::models::{Money, Transaction, TransactionCategory, TransactionId};
use crate::storage::Storage;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn record(
        &self,
        title: &str,
        amount: Money,
        date: DateTime<Utc>,
        category: TransactionCategory,
    ) -> WalletResult<Transaction> {
        let txn = Transaction::new(title.trim(), amount, date, category);
        self.add(txn)
    }

    /// Append an already-built transaction
    pub fn add(&self, txn: Transaction) -> WalletResult<Transaction> {
        let txn = self.storage.ledger.add(txn)?;

        self.storage.audit.log(
            AuditEntry::create(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.title.clone()),
            )
            .with_detail(format!("amount {}", txn.amount)),
        )?;

        Ok(txn)
    }

    /// Delete a transaction. Unknown IDs are ignored and return `None`.
    pub fn remove(&self, id: TransactionId) -> WalletResult<Option<Transaction>> {
        let removed = self.storage.ledger.remove(id)?;
        if let Some(txn) = &removed {
            self.log_delete(txn)?;
        }
        Ok(removed)
    }

    /// Delete the transactions at the given list positions
    pub fn remove_at(&self, offsets: &[usize]) -> WalletResult<Vec<Transaction>> {
        let removed = self.storage.ledger.remove_at(offsets)?;
        for txn in &removed {
            self.log_delete(txn)?;
        }
        Ok(removed)
    }

    fn log_delete(&self, txn: &Transaction) -> WalletResult<()> {
        self.storage.audit.log(AuditEntry::delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.title.clone()),
        ))
    }

    /// Find a transaction by ID, failing if it does not exist
    pub fn require(&self, identifier: &str) -> WalletResult<Transaction> {
        self.storage
            .ledger
            .find(identifier)?
            .ok_or_else(|| WalletError::transaction_not_found(identifier))
    }

    /// All transactions in insertion order
    pub fn list(&self) -> WalletResult<Vec<Transaction>> {
        self.storage.ledger.list()
    }

    /// Current balance
    pub fn balance(&self) -> WalletResult<Money> {
        self.storage.ledger.balance()
    }
}
