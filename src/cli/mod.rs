//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every handler works
//! on the in-memory storage built at startup.

pub mod card;
pub mod export;
pub mod transaction;

pub use card::{handle_card_command, CardCommands};
pub use export::{handle_export, ExportFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};
