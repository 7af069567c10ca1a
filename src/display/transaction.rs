//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:<13} {:<20} {:>12}",
        txn.date.format(&settings.date_format),
        truncate(&txn.title, 20),
        txn.amount.format_with_symbol(&settings.currency_symbol),
    )
}

/// Format transactions as a table, in the order given. The `#` column is
/// the list position accepted by `txn remove --at`.
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .enumerate()
        .map(|(position, txn)| TransactionRow {
            position,
            date: txn.date.format(&settings.date_format).to_string(),
            title: txn.title.clone(),
            category: txn.category.display_name().to_string(),
            amount: txn.amount.format_with_symbol(&settings.currency_symbol),
            id: txn.id.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
