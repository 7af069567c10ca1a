//! Card service
//!
//! Business logic for card entry: turns form input into a card, applies the
//! repository commands and records each one in the audit trail.

use tracing::warn;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{WalletError, WalletResult};
use crate::models::{CardDraft, CardId, CreditCard};
use crate::storage::Storage;

/// Service for card management
pub struct CardService<'a> {
    storage: &'a Storage,
}

impl<'a> CardService<'a> {
    /// Create a new card service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a card from add-card form input
    ///
    /// The number is normalized into its masked form before the card is
    /// stored. Incomplete or malformed input fails with a validation error
    /// and leaves the repository untouched.
    pub fn add_from_draft(&self, draft: CardDraft) -> WalletResult<CreditCard> {
        if !draft.is_complete() {
            warn!(card_name = %draft.name, "card draft submitted with empty fields");
        }

        let card = self.storage.cards.add(CreditCard::new(draft))?;

        let mut entry = AuditEntry::create(
            EntityType::Card,
            card.id().to_string(),
            Some(card.name().to_string()),
        );
        if card.is_default() {
            entry = entry.with_detail("set as default");
        }
        self.storage.audit.log(entry)?;

        Ok(card)
    }

    /// Delete a card. Unknown IDs are ignored and return `None`.
    pub fn remove(&self, id: CardId) -> WalletResult<Option<CreditCard>> {
        let removed = self.storage.cards.remove(id)?;

        if let Some(card) = &removed {
            let mut entry = AuditEntry::delete(
                EntityType::Card,
                card.id().to_string(),
                Some(card.name().to_string()),
            );
            if card.is_default() {
                entry = entry.with_detail("default card removed, no default remains");
            }
            self.storage.audit.log(entry)?;
        }

        Ok(removed)
    }

    /// Make a card the only default
    pub fn set_default(&self, id: CardId) -> WalletResult<CreditCard> {
        let (card, previous) = self.storage.cards.set_default(id)?;

        let detail = match previous {
            Some(prev) if prev.id() != card.id() => {
                format!("default moved from {}", prev.name())
            }
            Some(_) => "already default".to_string(),
            None => "set as default".to_string(),
        };
        self.storage.audit.log(
            AuditEntry::update(
                EntityType::Card,
                card.id().to_string(),
                Some(card.name().to_string()),
            )
            .with_detail(detail),
        )?;

        Ok(card)
    }

    /// Find a card by name or ID
    pub fn find(&self, identifier: &str) -> WalletResult<Option<CreditCard>> {
        self.storage.cards.find(identifier)
    }

    /// Find a card by name or ID, failing if it does not exist
    pub fn require(&self, identifier: &str) -> WalletResult<CreditCard> {
        self.find(identifier)?
            .ok_or_else(|| WalletError::card_not_found(identifier))
    }

    /// All cards in insertion order
    pub fn list(&self) -> WalletResult<Vec<CreditCard>> {
        self.storage.cards.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::CardType;

    fn draft(name: &str, number: &str, is_default: bool) -> CardDraft {
        CardDraft {
            name: name.into(),
            number: number.into(),
            expiry: "01/28".into(),
            cvv: "999".into(),
            cardholder_name: "Jane Roe".into(),
            card_type: CardType::Discover,
            is_default,
        }
    }

    #[test]
    fn test_add_from_draft_normalizes_and_audits() {
        let storage = Storage::new();
        let service = CardService::new(&storage);

        let card = service
            .add_from_draft(draft("Travel", "6011 0000 0000 0004", true))
            .unwrap();
        assert_eq!(card.masked_number(), "•••• •••• •••• 0004");
        assert_eq!(card.grouped_number(), "6011 0000 0000 0004");

        let audit = storage.audit.read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
        assert_eq!(audit[0].detail.as_deref(), Some("set as default"));
    }

    #[test]
    fn test_rejected_draft_is_not_audited() {
        let storage = Storage::new();
        let service = CardService::new(&storage);

        let err = service.add_from_draft(draft("", "6011000000000004", false)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
        assert!(storage.cards.is_empty().unwrap());
    }

    #[test]
    fn test_audit_never_contains_card_number() {
        let storage = Storage::new();
        let service = CardService::new(&storage);
        let card = service.add_from_draft(draft("Travel", "6011000000000004", true)).unwrap();
        service.set_default(card.id()).unwrap();
        service.remove(card.id()).unwrap();

        let json = serde_json::to_string(&storage.audit.read_all().unwrap()).unwrap();
        assert!(!json.contains("6011000000000004"));
        assert!(!json.contains("6011 0000"));
    }

    #[test]
    fn test_set_default_moves_flag() {
        let storage = Storage::new();
        let service = CardService::new(&storage);
        service.add_from_draft(draft("A", "4111111111111234", true)).unwrap();
        let b = service.add_from_draft(draft("B", "5555555555555678", false)).unwrap();

        let updated = service.set_default(b.id()).unwrap();
        assert!(updated.is_default());

        let last = storage.audit.read_recent(1).unwrap().remove(0);
        assert_eq!(last.operation, Operation::Update);
        assert_eq!(last.detail.as_deref(), Some("default moved from A"));
    }

    #[test]
    fn test_set_default_on_current_default() {
        let storage = Storage::new();
        let service = CardService::new(&storage);
        let a = service.add_from_draft(draft("A", "4111111111111234", true)).unwrap();
        service.add_from_draft(draft("B", "5555555555555678", false)).unwrap();

        service.set_default(a.id()).unwrap();

        let last = storage.audit.read_recent(1).unwrap().remove(0);
        assert_eq!(last.detail.as_deref(), Some("already default"));
    }

    #[test]
    fn test_remove_unknown_is_silent() {
        let storage = Storage::new();
        let service = CardService::new(&storage);
        assert!(service.remove(CardId::new()).unwrap().is_none());
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_require_missing_card() {
        let storage = Storage::new();
        let err = CardService::new(&storage).require("Nope").unwrap_err();
        assert!(err.is_not_found());
    }
}
