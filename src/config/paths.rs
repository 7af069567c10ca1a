//! Path management for wallet configuration
//!
//! ## Path Resolution Order
//!
//! 1. `WALLET_CLI_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/wallet-cli` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::WalletError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "WALLET_CLI_CONFIG_DIR";

/// Resolves the files the wallet reads configuration from
#[derive(Debug, Clone)]
pub struct WalletPaths {
    config_dir: PathBuf,
}

impl WalletPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform has no home
    /// directory.
    pub fn new() -> Result<Self, WalletError> {
        if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(Self::with_config_dir(PathBuf::from(custom)));
        }

        let dirs = ProjectDirs::from("", "", "wallet-cli").ok_or_else(|| {
            WalletError::Config("Could not determine a home directory".into())
        })?;
        Ok(Self::with_config_dir(dirs.config_dir().to_path_buf()))
    }

    /// Use an explicit config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

        let paths = WalletPaths::new().unwrap();
        assert_eq!(paths.config_dir(), temp_dir.path());

        std::env::remove_var(CONFIG_DIR_ENV);
    }
}
