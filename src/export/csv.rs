//! CSV export
//!
//! Transactions and cards go to separate sheets since they share no columns.

use serde::Serialize;
use std::io::Write;

use crate::error::{WalletError, WalletResult};
use crate::export::json::CardRecord;
use crate::storage::Storage;

fn export_err(e: impl std::fmt::Display) -> WalletError {
    WalletError::Export(e.to_string())
}

#[derive(Serialize)]
struct TransactionCsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct CardCsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Number")]
    masked_number: &'a str,
    #[serde(rename = "Expiry")]
    expiry: &'a str,
    #[serde(rename = "Type")]
    card_type: &'a str,
    #[serde(rename = "Default")]
    is_default: bool,
    #[serde(rename = "Cardholder")]
    cardholder_name: &'a str,
}

/// Export all transactions to CSV, in ledger order
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> WalletResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in storage.ledger.list()? {
        csv_writer
            .serialize(TransactionCsvRow {
                id: txn.id.as_uuid().to_string(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                title: &txn.title,
                category: txn.category.display_name(),
                amount: txn.amount.format_with_symbol(""),
            })
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(export_err)?;
    Ok(())
}

/// Export all cards to CSV with masked numbers
pub fn export_cards_csv<W: Write>(storage: &Storage, writer: W) -> WalletResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for card in storage.cards.list()? {
        let record = CardRecord::from(&card);
        csv_writer
            .serialize(CardCsvRow {
                id: record.id.as_uuid().to_string(),
                name: &record.name,
                masked_number: &record.masked_number,
                expiry: &record.expiry,
                card_type: record.card_type.display_name(),
                is_default: record.is_default,
                cardholder_name: &record.cardholder_name,
            })
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(export_err)?;
    Ok(())
}
