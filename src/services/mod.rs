//! Service layer for the wallet
//!
//! The service layer sits on top of the repositories: it turns user input into
//! entities, runs the repository commands, records the audit trail and builds
//! the read-only projections the presentation layer renders.

pub mod card;
pub mod ledger;
pub mod summary;

pub use card::CardService;
pub use ledger::LedgerService;
pub use summary::{HomeSummary, SummaryService, SummaryTotals, HOME_PREVIEW_COUNT};
