//! Configuration module for the wallet
//!
//! This module provides:
//! - Config directory resolution
//! - Display settings loaded from `config.json`

pub mod paths;
pub mod settings;

pub use paths::WalletPaths;
pub use settings::Settings;
