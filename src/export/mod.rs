//! Export functionality
//!
//! Writes wallet contents as JSON, YAML or CSV. Exports carry masked card
//! numbers only.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_cards_csv, export_transactions_csv};
pub use json::{export_wallet_json, CardRecord, WalletExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_wallet_yaml;
