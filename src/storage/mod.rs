//! In-memory storage for the wallet
//!
//! Each repository owns its collection outright; callers get cloned
//! snapshots. Nothing here touches the filesystem.

pub mod cards;
pub mod ledger;
pub mod seed;

pub use cards::CardRepository;
pub use ledger::LedgerRepository;
pub use seed::demo_storage;

use crate::audit::AuditLog;
use crate::error::WalletResult;
use crate::models::{CreditCard, Transaction};

/// Owns the card and ledger repositories plus the audit trail
///
/// Pass it by reference to the services and presentation code; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct Storage {
    pub cards: CardRepository,
    pub ledger: LedgerRepository,
    pub audit: AuditLog,
}

impl Storage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage seeded with transactions and cards
    ///
    /// Seeding is not audited.
    pub fn with_seed(
        transactions: impl IntoIterator<Item = Transaction>,
        cards: impl IntoIterator<Item = CreditCard>,
    ) -> WalletResult<Self> {
        Ok(Self {
            cards: CardRepository::with_cards(cards)?,
            ledger: LedgerRepository::with_transactions(transactions)?,
            audit: AuditLog::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_storage_is_empty() {
        let storage = Storage::new();
        assert!(storage.cards.is_empty().unwrap());
        assert!(storage.ledger.is_empty().unwrap());
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_seeding_is_not_audited() {
        let storage = demo_storage().unwrap();
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
    }
}
