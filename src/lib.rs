//! wallet-cli - in-memory wallet data layer
//!
//! Holds credit cards and a transaction ledger in memory and exposes the
//! operations a wallet app's screens need: card entry with number masking,
//! a derived balance, and the home-screen previews.
//!
//! # Architecture
//!
//! - `models`: cards, transactions, money, lookup tables
//! - `storage`: lock-guarded repositories and the demo seed
//! - `services`: business logic and audit logging
//! - `audit`: in-memory audit trail
//! - `display`: terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `config`: settings file and paths
//! - `cli`: command handlers for the `wallet` binary
//!
//! # Example
//!
//! ```
//! use wallet_cli::services::SummaryService;
//! use wallet_cli::storage::demo_storage;
//!
//! let storage = demo_storage()?;
//! let summary = SummaryService::new(&storage).home_summary()?;
//! assert_eq!(summary.balance.cents(), 236520);
//! # Ok::<(), wallet_cli::WalletError>(())
//! ```

use std::sync::Once;

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WalletError, WalletResult};
pub use models::normalize;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber. Safe to call more than once.
///
/// `RUST_LOG` overrides the default `warn` level unless `verbose` is set.
/// Output goes to stderr so command output stays clean.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = if verbose {
            EnvFilter::new("wallet_cli=debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wallet_cli=warn"))
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
