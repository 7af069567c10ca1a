//! Card display formatting
//!
//! Cards are always shown masked unless the caller explicitly asks to reveal
//! the full number and CVV.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CreditCard;

const HIDDEN_CVV: &str = "•••";

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Type")]
    card_type: String,
    #[tabled(rename = "Expires")]
    expiry: String,
    #[tabled(rename = "Cardholder")]
    cardholder: String,
    #[tabled(rename = "Default")]
    default: &'static str,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&CreditCard> for CardRow {
    fn from(card: &CreditCard) -> Self {
        Self {
            name: card.name().to_string(),
            number: card.masked_number().to_string(),
            card_type: card.card_type().to_string(),
            expiry: card.expiry().to_string(),
            cardholder: card.cardholder_name().to_string(),
            default: if card.is_default() { "DEFAULT" } else { "" },
            id: card.id().to_string(),
        }
    }
}

/// Format cards as a table, masked
pub fn format_card_list(cards: &[CreditCard]) -> String {
    if cards.is_empty() {
        return "No cards found.\n".to_string();
    }

    let rows: Vec<CardRow> = cards.iter().map(CardRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// One-line preview used on the home screen
pub fn format_card_preview(card: &CreditCard) -> String {
    let badge = if card.is_default() { "  [DEFAULT]" } else { "" };
    format!(
        "{:<16} {}  {:<16} Expires: {}  {}{}",
        card.name(),
        card.masked_number(),
        card.card_type().display_name(),
        card.expiry(),
        card.cardholder_name(),
        badge
    )
}

/// Format a card's details. Number and CVV stay masked unless `reveal` is set.
pub fn format_card_details(card: &CreditCard, reveal: bool) -> String {
    let number = if reveal {
        card.grouped_number()
    } else {
        card.masked_number().to_string()
    };
    let cvv = if reveal {
        card.cvv().expose().to_string()
    } else {
        HIDDEN_CVV.to_string()
    };

    let rows = [
        ("Card Name", card.name().to_string()),
        ("Card Number", number),
        ("Expiry Date", card.expiry().to_string()),
        ("CVV", cvv),
        ("Cardholder", card.cardholder_name().to_string()),
        ("Card Type", card.card_type().display_name().to_string()),
        (
            "Default Card",
            if card.is_default() { "Yes" } else { "No" }.to_string(),
        ),
        ("ID", card.id().to_string()),
    ];

    let mut output = String::new();
    for (title, value) in rows {
        output.push_str(&format!("  {:<14}{}\n", title, value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardDraft, CardType};

    fn groceries() -> CreditCard {
        CreditCard::new(CardDraft {
            name: "Groceries".into(),
            number: "4111111111111234".into(),
            expiry: "12/25".into(),
            cvv: "123".into(),
            cardholder_name: "John Doe".into(),
            card_type: CardType::Visa,
            is_default: true,
        })
    }

    #[test]
    fn test_card_list_is_masked() {
        let output = format_card_list(&[groceries()]);
        assert!(output.contains("Groceries"));
        assert!(output.contains("•••• •••• •••• 1234"));
        assert!(output.contains("DEFAULT"));
        assert!(!output.contains("4111 1111"));
    }

    #[test]
    fn test_empty_card_list() {
        assert_eq!(format_card_list(&[]), "No cards found.\n");
    }

    #[test]
    fn test_details_hidden_by_default() {
        let output = format_card_details(&groceries(), false);
        assert!(output.contains("•••• •••• •••• 1234"));
        assert!(output.contains("CVV           •••"));
        assert!(output.contains("Default Card  Yes"));
        assert!(!output.contains("4111 1111"));
    }

    #[test]
    fn test_details_revealed() {
        let output = format_card_details(&groceries(), true);
        assert!(output.contains("4111 1111 1111 1234"));
        assert!(output.contains("CVV           123"));
    }

    #[test]
    fn test_preview_line() {
        let line = format_card_preview(&groceries());
        assert!(line.starts_with("Groceries"));
        assert!(line.contains("Expires: 12/25"));
        assert!(line.ends_with("[DEFAULT]"));
    }
}
