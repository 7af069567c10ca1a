//! User settings for the wallet
//!
//! Display preferences only. Settings are read from `config.json` when it
//! exists; they are never written back automatically.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;
use crate::services::HOME_PREVIEW_COUNT;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for transaction rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Cards shown in the home screen preview
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,

    /// Transactions shown under "Recent Transactions"
    #[serde(default = "default_preview_count")]
    pub recent_count: usize,

    /// Show full card numbers and CVVs in detail views without `--reveal`
    #[serde(default)]
    pub reveal_sensitive_by_default: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_preview_count() -> usize {
    HOME_PREVIEW_COUNT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            preview_count: default_preview_count(),
            recent_count: default_preview_count(),
            reveal_sensitive_by_default: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &WalletPaths) -> Result<Self, WalletError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WalletError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| WalletError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would fail at render time
    pub fn validate(&self) -> Result<(), WalletError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(WalletError::Config(format!(
                "Invalid date_format '{}': not a strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk, creating the config directory if needed
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        std::fs::create_dir_all(paths.config_dir()).map_err(|e| {
            WalletError::Io(format!("Failed to create config directory: {}", e))
        })?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WalletError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.preview_count, 3);
        assert_eq!(settings.recent_count, 3);
        assert!(!settings.reveal_sensitive_by_default);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_config_dir(temp_dir.path().join("absent"));

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_config_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            recent_count: 5,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.recent_count, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"preview_count": 1}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.preview_count, 1);
        assert_eq!(loaded.recent_count, 3);
        assert_eq!(loaded.date_format, "%b %d, %Y");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }

    #[test]
    fn test_validate_accepts_custom_date_format() {
        let settings = Settings {
            date_format: "%Y-%m-%d".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
        assert!(Settings::default().validate().is_ok());
    }
}
