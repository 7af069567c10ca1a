//! Home screen aggregation
//!
//! Read-only projections over the repositories. Nothing here mutates.
//!
//! A [`HomeSummary`] is not a consistent snapshot: the balance and the two
//! lists are read one after another, so a command that lands between the
//! reads can show up in one field and not the others.

use serde::Serialize;

use crate::error::{WalletError, WalletResult};
use crate::models::{CreditCard, Money, Transaction};
use crate::storage::Storage;

/// How many cards and transactions the home screen previews
pub const HOME_PREVIEW_COUNT: usize = 3;

/// What the home screen shows
#[derive(Debug, Clone)]
pub struct HomeSummary {
    pub balance: Money,
    /// Total cards held, shown next to the preview
    pub card_count: usize,
    /// First cards in insertion order
    pub top_cards: Vec<CreditCard>,
    /// First transactions in insertion order
    pub recent_transactions: Vec<Transaction>,
}

/// Serializable totals for export and machine-readable output
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTotals {
    pub balance: Money,
    pub card_count: usize,
    pub transaction_count: usize,
    pub income: Money,
    pub spending: Money,
}

/// Aggregates repository reads for display
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Balance, the top three cards and the first three transactions
    pub fn home_summary(&self) -> WalletResult<HomeSummary> {
        self.home_summary_sized(HOME_PREVIEW_COUNT, HOME_PREVIEW_COUNT)
    }

    /// Same as [`SummaryService::home_summary`] with configurable preview sizes
    pub fn home_summary_sized(
        &self,
        card_count: usize,
        transaction_count: usize,
    ) -> WalletResult<HomeSummary> {
        Ok(HomeSummary {
            balance: self.storage.ledger.balance()?,
            card_count: self.storage.cards.len()?,
            top_cards: self.storage.cards.preview_top(card_count)?,
            recent_transactions: self.storage.ledger.recent_top(transaction_count)?,
        })
    }

    /// Income, spending and counts across the whole ledger
    pub fn totals(&self) -> WalletResult<SummaryTotals> {
        let transactions = self.storage.ledger.list()?;
        let out_of_range = || WalletError::Validation("Ledger totals are out of range".into());

        let income = Money::checked_sum(
            transactions
                .iter()
                .filter(|t| t.is_inflow())
                .map(|t| t.amount),
        )
        .ok_or_else(out_of_range)?;
        let spending = Money::checked_sum(
            transactions
                .iter()
                .filter(|t| t.is_outflow())
                .map(|t| t.amount),
        )
        .ok_or_else(out_of_range)?;
        let balance = income.checked_add(spending).ok_or_else(out_of_range)?;

        Ok(SummaryTotals {
            balance,
            card_count: self.storage.cards.len()?,
            transaction_count: transactions.len(),
            income,
            spending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardDraft, CardType, CreditCard, TransactionCategory};
    use chrono::Utc;
    use crate::storage::demo_storage;

    #[test]
    fn test_home_summary_on_demo_data() {
        let storage = demo_storage().unwrap();
        let summary = SummaryService::new(&storage).home_summary().unwrap();

        assert_eq!(summary.balance, Money::from_cents(236520));
        assert_eq!(summary.card_count, 2);
        assert_eq!(summary.top_cards.len(), 2);
        assert_eq!(summary.recent_transactions.len(), 3);
        assert_eq!(summary.recent_transactions[0].title, "Coffee Shop");
        assert_eq!(summary.recent_transactions[2].title, "Gas Station");
    }

    #[test]
    fn test_home_summary_caps_cards_at_three() {
        let storage = demo_storage().unwrap();
        for i in 0..3 {
            storage
                .cards
                .add(CreditCard::new(CardDraft {
                    name: format!("Extra {}", i),
                    number: "378282246310005".into(),
                    expiry: "03/27".into(),
                    cvv: "1234".into(),
                    cardholder_name: "John Doe".into(),
                    card_type: CardType::Amex,
                    is_default: false,
                }))
                .unwrap();
        }

        let summary = SummaryService::new(&storage).home_summary().unwrap();
        assert_eq!(summary.card_count, 5);
        let names: Vec<_> = summary.top_cards.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Groceries", "Bills", "Extra 0"]);
    }

    #[test]
    fn test_home_summary_on_empty_storage() {
        let storage = Storage::new();
        let summary = SummaryService::new(&storage).home_summary().unwrap();
        assert_eq!(summary.balance, Money::zero());
        assert!(summary.top_cards.is_empty());
        assert!(summary.recent_transactions.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let storage = demo_storage().unwrap();
        let service = SummaryService::new(&storage);
        let first = service.home_summary().unwrap();
        let second = service.home_summary().unwrap();
        assert_eq!(first.balance, second.balance);
        assert_eq!(first.recent_transactions, second.recent_transactions);
        assert_eq!(storage.audit.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_totals_out_of_range_income() {
        let storage = Storage::new();
        let entries = [
            ("Max", i64::MAX, TransactionCategory::Income),
            ("Fee", -1, TransactionCategory::Shopping),
            ("Refund", 1, TransactionCategory::Income),
        ];
        for (title, cents, category) in entries {
            let txn = Transaction::new(title, Money::from_cents(cents), Utc::now(), category);
            storage.ledger.add(txn).unwrap();
        }

        // The balance fits; income alone does not
        assert_eq!(storage.ledger.balance().unwrap(), Money::from_cents(i64::MAX));
        let err = SummaryService::new(&storage).totals().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_totals() {
        let storage = demo_storage().unwrap();
        let totals = SummaryService::new(&storage).totals().unwrap();
        assert_eq!(totals.income, Money::from_cents(250000));
        assert_eq!(totals.spending, Money::from_cents(-13480));
        assert_eq!(totals.balance, Money::from_cents(236520));
        assert_eq!(totals.transaction_count, 4);
    }
}
