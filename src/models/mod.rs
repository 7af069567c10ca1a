//! Core data models for the wallet
//!
//! Value records for cards and transactions, the card number normalizer, and
//! the lookup tables that map categories and card networks to appearance keys.

pub mod appearance;
pub mod card;
pub mod card_number;
pub mod card_type;
pub mod category;
pub mod ids;
pub mod money;
pub mod secret;
pub mod transaction;

pub use appearance::{Appearance, ColorKey, ColorStop, Gradient};
pub use card::{CardDraft, CardValidationError, CreditCard};
pub use card_number::{normalize, NormalizedNumber, MASK_GLYPH};
pub use card_type::CardType;
pub use category::TransactionCategory;
pub use ids::{CardId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use secret::SecretText;
pub use transaction::{Transaction, TransactionValidationError};
