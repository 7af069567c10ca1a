//! Card CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_card_details, format_card_list};
use crate::error::{WalletError, WalletResult};
use crate::models::{CardDraft, CardType};
use crate::services::CardService;
use crate::storage::Storage;

/// Card subcommands
#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// List all cards (numbers masked)
    List,
    /// Show card details
    Show {
        /// Card name or ID
        card: String,
        /// Show the full number and CVV
        #[arg(long)]
        reveal: bool,
    },
    /// Add a new card
    Add {
        /// Card name (e.g., "Groceries")
        name: String,
        /// Card number, spaces allowed
        number: String,
        /// Expiry date (e.g., "12/25")
        expiry: String,
        /// Security code
        cvv: String,
        /// Name on the card
        cardholder: String,
        /// Card network (visa, mastercard, amex, discover)
        #[arg(short = 't', long = "type", default_value = "visa")]
        card_type: String,
        /// Make this the default card
        #[arg(short, long)]
        default: bool,
    },
    /// Remove a card
    Remove {
        /// Card name or ID
        card: String,
    },
    /// Make a card the default
    Default {
        /// Card name or ID
        card: String,
    },
}

/// Handle a card command
pub fn handle_card_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CardCommands,
) -> WalletResult<()> {
    let service = CardService::new(storage);

    match cmd {
        CardCommands::List => {
            print!("{}", format_card_list(&service.list()?));
        }
        CardCommands::Show { card, reveal } => {
            let card = service.require(&card)?;
            let reveal = reveal || settings.reveal_sensitive_by_default;
            print!("{}", format_card_details(&card, reveal));
        }
        CardCommands::Add {
            name,
            number,
            expiry,
            cvv,
            cardholder,
            card_type,
            default,
        } => {
            let card_type = CardType::parse(&card_type).ok_or_else(|| {
                WalletError::Validation(format!(
                    "Unknown card type '{}'. Use visa, mastercard, amex or discover",
                    card_type
                ))
            })?;

            let card = service.add_from_draft(CardDraft {
                name,
                number,
                expiry,
                cvv,
                cardholder_name: cardholder,
                card_type,
                is_default: default,
            })?;

            println!("Added card: {}", card);
            if card.is_default() {
                println!("  Set as default card");
            }
            println!();
            print!("{}", format_card_list(&service.list()?));
        }
        CardCommands::Remove { card } => {
            let card = service.require(&card)?;
            service.remove(card.id())?;
            println!("Removed card: {}", card.name());
            if card.is_default() {
                println!("  No default card is set now");
            }
            println!();
            print!("{}", format_card_list(&service.list()?));
        }
        CardCommands::Default { card } => {
            let card = service.require(&card)?;
            let card = service.set_default(card.id())?;
            println!("Default card: {}", card);
        }
    }

    Ok(())
}
