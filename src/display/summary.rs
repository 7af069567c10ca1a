//! Home screen formatting

use crate::config::Settings;
use crate::services::HomeSummary;

use super::card::format_card_preview;
use super::transaction::format_transaction_row;

/// Render the home screen: balance, card preview and recent transactions
pub fn format_home_summary(summary: &HomeSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Current Balance\n");
    output.push_str(&format!(
        "  {}\n\n",
        summary.balance.format_with_symbol(&settings.currency_symbol)
    ));

    let noun = if summary.card_count == 1 { "card" } else { "cards" };
    output.push_str(&format!("Credit Cards ({} {})\n", summary.card_count, noun));
    if summary.top_cards.is_empty() {
        output.push_str("  No cards yet.\n");
    }
    for card in &summary.top_cards {
        output.push_str(&format!("  {}\n", format_card_preview(card)));
    }
    output.push('\n');

    output.push_str("Recent Transactions\n");
    if summary.recent_transactions.is_empty() {
        output.push_str("  No transactions yet.\n");
    }
    for txn in &summary.recent_transactions {
        output.push_str(&format!("  {}\n", format_transaction_row(txn, settings)));
    }

    output
}
