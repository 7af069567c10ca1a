//! Demo data
//!
//! The sample wallet the app starts with: four transactions over the last
//! four days and two cards, the first of them the default.

use chrono::{DateTime, Duration, Utc};

use crate::error::WalletResult;
use crate::models::{CardDraft, CardType, CreditCard, Money, Transaction, TransactionCategory};

use super::Storage;

/// Demo transactions, newest first, dated relative to `now`
pub fn demo_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let seed = [
        ("Coffee Shop", -450, 0, TransactionCategory::Food),
        ("Salary", 250000, 1, TransactionCategory::Income),
        ("Gas Station", -4500, 2, TransactionCategory::Transport),
        ("Grocery Store", -8530, 3, TransactionCategory::Shopping),
    ];

    seed.into_iter()
        .map(|(title, cents, days_ago, category)| {
            Transaction::new(
                title,
                Money::from_cents(cents),
                now - Duration::days(days_ago),
                category,
            )
        })
        .collect()
}

/// Demo cards
pub fn demo_cards() -> Vec<CreditCard> {
    vec![
        CreditCard::new(CardDraft {
            name: "Groceries".into(),
            number: "4111111111111234".into(),
            expiry: "12/25".into(),
            cvv: "123".into(),
            cardholder_name: "John Doe".into(),
            card_type: CardType::Visa,
            is_default: true,
        }),
        CreditCard::new(CardDraft {
            name: "Bills".into(),
            number: "5555555555555678".into(),
            expiry: "09/26".into(),
            cvv: "456".into(),
            cardholder_name: "John Doe".into(),
            card_type: CardType::Mastercard,
            is_default: false,
        }),
    ]
}

/// Storage pre-filled with the demo wallet
pub fn demo_storage() -> WalletResult<Storage> {
    Storage::with_seed(demo_transactions(Utc::now()), demo_cards())
}
