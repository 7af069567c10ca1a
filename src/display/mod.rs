//! Display formatting for terminal output
//!
//! Renders cards, transactions and the home screen as text. Card numbers are
//! masked everywhere except an explicit reveal in the detail view.

pub mod card;
pub mod summary;
pub mod transaction;

pub use card::{format_card_details, format_card_list, format_card_preview};
pub use summary::format_home_summary;
pub use transaction::{format_transaction_list, format_transaction_row};
