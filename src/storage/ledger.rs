//! Ledger repository
//!
//! Holds transactions in insertion order (not date order) and derives the
//! balance from them on every call.

use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{WalletError, WalletResult};
use crate::models::{Money, Transaction, TransactionId};

/// Repository for ledger transactions
#[derive(Debug, Default)]
pub struct LedgerRepository {
    data: RwLock<Vec<Transaction>>,
}

impl LedgerRepository {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger seeded with `transactions`, kept in the given order
    pub fn with_transactions(
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> WalletResult<Self> {
        let repo = Self::new();
        for txn in transactions {
            repo.add(txn)?;
        }
        Ok(repo)
    }

    fn read(&self) -> WalletResult<RwLockReadGuard<'_, Vec<Transaction>>> {
        self.data
            .read()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> WalletResult<RwLockWriteGuard<'_, Vec<Transaction>>> {
        self.data
            .write()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Append a transaction. The title must not be blank.
    pub fn add(&self, txn: Transaction) -> WalletResult<Transaction> {
        txn.validate().map_err(|e| WalletError::Validation(e.to_string()))?;

        let mut data = self.write()?;
        if data.iter().any(|t| t.id == txn.id) {
            return Err(WalletError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        let amounts = data.iter().map(|t| t.amount).chain([txn.amount]);
        if Money::checked_sum(amounts).is_none() {
            return Err(WalletError::Validation(format!(
                "Amount {} would put the balance out of range",
                txn.amount
            )));
        }

        debug!(txn = %txn.id, amount = txn.amount.cents(), "transaction added");
        data.push(txn.clone());
        Ok(txn)
    }

    /// Remove a transaction by ID. Absent IDs are a no-op.
    pub fn remove(&self, id: TransactionId) -> WalletResult<Option<Transaction>> {
        let mut data = self.write()?;

        match data.iter().position(|t| t.id == id) {
            Some(index) => {
                debug!(txn = %id, "transaction removed");
                Ok(Some(data.remove(index)))
            }
            None => Ok(None),
        }
    }

    /// Remove the transactions at the given list positions, as a list view's
    /// swipe-to-delete does.
    ///
    /// Offsets refer to the order returned by [`LedgerRepository::list`] at
    /// call time. Duplicate and out-of-range offsets are ignored. Returns the
    /// removed transactions in their original order.
    pub fn remove_at(&self, offsets: &[usize]) -> WalletResult<Vec<Transaction>> {
        let mut data = self.write()?;

        let positions: BTreeSet<usize> = offsets
            .iter()
            .copied()
            .filter(|&i| i < data.len())
            .collect();

        let mut removed: Vec<Transaction> = positions
            .iter()
            .rev()
            .map(|&i| data.remove(i))
            .collect();
        removed.reverse();

        debug!(count = removed.len(), "transactions removed by offset");
        Ok(removed)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> WalletResult<Option<Transaction>> {
        let data = self.read()?;
        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> WalletResult<Option<Transaction>> {
        let data = self.read()?;
        Ok(data.iter().find(|t| t.id.matches(identifier)).cloned())
    }

    /// All transactions in insertion order
    pub fn list(&self) -> WalletResult<Vec<Transaction>> {
        Ok(self.read()?.clone())
    }

    /// Sum of every amount currently in the ledger
    ///
    /// Recomputed on each call. Fails if the total leaves the representable
    /// range, which only removals can cause since `add` checks it.
    pub fn balance(&self) -> WalletResult<Money> {
        let data = self.read()?;
        Money::checked_sum(data.iter().map(|t| t.amount))
            .ok_or_else(|| WalletError::Validation("Ledger balance is out of range".into()))
    }

    /// The first `n` transactions in insertion order
    ///
    /// This is a display-order shortcut, not a recency query: a transaction
    /// added later with an older date still counts as "recent". Use
    /// [`LedgerRepository::recent_by_date`] for timestamp order.
    pub fn recent_top(&self, n: usize) -> WalletResult<Vec<Transaction>> {
        let data = self.read()?;
        Ok(data.iter().take(n).cloned().collect())
    }

    /// The `n` newest transactions by date, newest first. Ties keep
    /// insertion order.
    pub fn recent_by_date(&self, n: usize) -> WalletResult<Vec<Transaction>> {
        let mut transactions = self.list()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.truncate(n);
        Ok(transactions)
    }

    pub fn len(&self) -> WalletResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> WalletResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
