//! JSON export
//!
//! Exports every card and transaction with a header block. Cards are written
//! with their masked number only; the full number and CVV never leave memory.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{WalletError, WalletResult};
use crate::models::{CardId, CardType, CreditCard, Transaction};
use crate::services::{SummaryService, SummaryTotals};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A card as it appears in an export
#[derive(Debug, Clone, Serialize)]
pub struct CardRecord {
    pub id: CardId,
    pub name: String,
    pub masked_number: String,
    pub expiry: String,
    pub card_type: CardType,
    pub is_default: bool,
    pub cardholder_name: String,
}

impl From<&CreditCard> for CardRecord {
    fn from(card: &CreditCard) -> Self {
        Self {
            id: card.id(),
            name: card.name().to_string(),
            masked_number: card.masked_number().to_string(),
            expiry: card.expiry().to_string(),
            card_type: card.card_type(),
            is_default: card.is_default(),
            cardholder_name: card.cardholder_name().to_string(),
        }
    }
}

/// Full wallet export structure
#[derive(Debug, Clone, Serialize)]
pub struct WalletExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub totals: SummaryTotals,
    pub cards: Vec<CardRecord>,
    pub transactions: Vec<Transaction>,
}

impl WalletExport {
    /// Snapshot the current storage contents
    pub fn from_storage(storage: &Storage) -> WalletResult<Self> {
        let totals = SummaryService::new(storage).totals()?;
        let cards = storage.cards.list()?.iter().map(CardRecord::from).collect();
        let transactions = storage.ledger.list()?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            totals,
            cards,
            transactions,
        })
    }
}

/// Write the full wallet as pretty-printed JSON
pub fn export_wallet_json<W: Write>(storage: &Storage, writer: &mut W) -> WalletResult<()> {
    let export = WalletExport::from_storage(storage)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| WalletError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| WalletError::Export(e.to_string()))?;
    Ok(())
}
