//! Transaction CLI commands

use chrono::{NaiveDate, TimeZone, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{WalletError, WalletResult};
use crate::models::{Money, Transaction, TransactionCategory};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Newest first instead of ledger order
        #[arg(long)]
        by_date: bool,
    },
    /// Record a transaction
    Add {
        /// Title (e.g., "Coffee Shop")
        title: String,
        /// Amount (e.g., "-4.50" for spending, "2500" for income)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (food, transport, shopping, income, entertainment)
        #[arg(short, long, default_value = "shopping")]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove transactions by ID or list position
    Remove {
        /// Transaction ID
        #[arg(required_unless_present = "at")]
        id: Option<String>,
        /// List positions in ledger order, as shown by `txn list`
        #[arg(long, value_delimiter = ',', conflicts_with = "id")]
        at: Vec<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> WalletResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        TransactionCommands::List { limit, by_date } => {
            let mut transactions = if by_date {
                storage.ledger.recent_by_date(usize::MAX)?
            } else {
                service.list()?
            };
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            print!("{}", format_transaction_list(&transactions, settings));
        }
        TransactionCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                WalletError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            let category = TransactionCategory::parse(&category).ok_or_else(|| {
                WalletError::Validation(format!("Unknown category '{}'", category))
            })?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Utc::now(),
            };

            let txn = service.record(&title, amount, date, category)?;
            println!("Recorded: {}", txn.accessibility_label());
            println!(
                "Balance:  {}",
                service.balance()?.format_with_symbol(&settings.currency_symbol)
            );
        }
        TransactionCommands::Remove { id, at } => {
            let removed: Vec<Transaction> = match id {
                Some(id) => {
                    let txn = service.require(&id)?;
                    service.remove(txn.id)?.into_iter().collect()
                }
                None => service.remove_at(&at)?,
            };

            if removed.is_empty() {
                println!("Nothing removed.");
            }
            for txn in &removed {
                println!("Removed: {}", txn.title);
            }
            println!(
                "Balance: {}",
                service.balance()?.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date as midday UTC
fn parse_date(s: &str) -> WalletResult<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        WalletError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })?;
    let midday = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| WalletError::Validation(format!("Invalid date: '{}'", s)))?;
    Ok(Utc.from_utc_datetime(&midday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-08-05").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 8, 5));
        assert!(parse_date("08/05/2025").unwrap_err().is_validation());
    }
}
