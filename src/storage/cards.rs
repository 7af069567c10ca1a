//! Card repository
//!
//! Holds credit cards in insertion order and enforces that at most one card
//! is flagged as the default.
//!
//! Every mutation runs under a single write lock, so a reader sees the state
//! either before or after an `add`/`set_default`, never a half-cleared
//! default flag.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::error::{WalletError, WalletResult};
use crate::models::{CardId, CreditCard};

/// Repository for credit cards
#[derive(Debug, Default)]
pub struct CardRepository {
    data: RwLock<Vec<CreditCard>>,
}

impl CardRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `cards`, added in order.
    ///
    /// Seeds go through [`CardRepository::add`], so if several are flagged
    /// default only the last one keeps the flag.
    pub fn with_cards(cards: impl IntoIterator<Item = CreditCard>) -> WalletResult<Self> {
        let repo = Self::new();
        for card in cards {
            repo.add(card)?;
        }
        Ok(repo)
    }

    fn read(&self) -> WalletResult<RwLockReadGuard<'_, Vec<CreditCard>>> {
        self.data
            .read()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> WalletResult<RwLockWriteGuard<'_, Vec<CreditCard>>> {
        self.data
            .write()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Append a card
    ///
    /// Fails with a validation error if a required field is empty or the
    /// number is malformed. A card flagged default clears the flag on every
    /// existing card first.
    pub fn add(&self, card: CreditCard) -> WalletResult<CreditCard> {
        card.validate().map_err(|e| WalletError::Validation(e.to_string()))?;

        let mut data = self.write()?;

        if data.iter().any(|c| c.id() == card.id()) {
            return Err(WalletError::Duplicate {
                entity_type: "Card",
                identifier: card.id().to_string(),
            });
        }

        if card.is_default() {
            let cleared = clear_default(&mut data);
            if cleared > 0 {
                info!(card = %card.id(), cleared, "new card takes over default");
            }
        }

        debug!(card = %card.id(), card_type = card.card_type().as_str(), "card added");
        data.push(card.clone());
        Ok(card)
    }

    /// Remove a card by ID
    ///
    /// Absent IDs are a no-op and return `None`. Removing the default card
    /// leaves the repository with no default; no other card is promoted.
    pub fn remove(&self, id: CardId) -> WalletResult<Option<CreditCard>> {
        let mut data = self.write()?;

        match data.iter().position(|c| c.id() == id) {
            Some(index) => {
                debug!(card = %id, "card removed");
                Ok(Some(data.remove(index)))
            }
            None => {
                debug!(card = %id, "remove ignored, card not present");
                Ok(None)
            }
        }
    }

    /// Make `id` the only default card
    ///
    /// Returns the updated card and the card that was default before, read
    /// under the same write lock.
    pub fn set_default(&self, id: CardId) -> WalletResult<(CreditCard, Option<CreditCard>)> {
        let mut data = self.write()?;

        let index = data
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| WalletError::card_not_found(id.to_string()))?;

        let previous = data.iter().find(|c| c.is_default()).cloned();
        clear_default(&mut data);
        data[index].set_default(true);

        info!(card = %id, "default card set");
        Ok((data[index].clone(), previous))
    }

    /// Get a card by ID
    pub fn get(&self, id: CardId) -> WalletResult<Option<CreditCard>> {
        let data = self.read()?;
        Ok(data.iter().find(|c| c.id() == id).cloned())
    }

    /// Find a card by name (case-insensitive) or by full or short ID
    pub fn find(&self, identifier: &str) -> WalletResult<Option<CreditCard>> {
        let data = self.read()?;
        let identifier = identifier.trim();

        if let Some(card) = data
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(identifier))
        {
            return Ok(Some(card.clone()));
        }

        Ok(data.iter().find(|c| c.id().matches(identifier)).cloned())
    }

    /// All cards in insertion order
    ///
    /// Returns a snapshot; iterating it never touches the repository.
    pub fn list(&self) -> WalletResult<Vec<CreditCard>> {
        Ok(self.read()?.clone())
    }

    /// The first `n` cards in insertion order
    pub fn preview_top(&self, n: usize) -> WalletResult<Vec<CreditCard>> {
        let data = self.read()?;
        Ok(data.iter().take(n).cloned().collect())
    }

    /// The card flagged default, if any
    pub fn default_card(&self) -> WalletResult<Option<CreditCard>> {
        let data = self.read()?;
        Ok(data.iter().find(|c| c.is_default()).cloned())
    }

    pub fn len(&self) -> WalletResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> WalletResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

/// Clear the default flag on every card, returning how many were set
fn clear_default(cards: &mut [CreditCard]) -> usize {
    let mut cleared = 0;
    for card in cards.iter_mut().filter(|c| c.is_default()) {
        card.set_default(false);
        cleared += 1;
    }
    cleared
}
