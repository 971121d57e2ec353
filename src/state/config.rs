//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! Unless a path is given on the command line, the configuration file is
//! stored at:
//! - Linux: `~/.config/wallet-page/config.json`
//! - macOS: `~/Library/Application Support/wallet-page/config.json`
//! - Windows: `%APPDATA%/wallet-page/config.json`
//!
//! # Example
//!
//! ```json
//! {
//!   "priorities": { "Neo": 60 },
//!   "fallback_priority": -99,
//!   "decimals": 4,
//!   "thousands_separator": true,
//!   "balances_path": "/home/me/wallet/balances.json",
//!   "prices_path": "/home/me/wallet/prices.json"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{Blockchain, WalletError};
use crate::format::AmountFormat;
use crate::pricing::{DEFAULT_FALLBACK_PRIORITY, PriorityTable};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "wallet-page";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Per-chain priority overrides on top of the built-in table.
    #[serde(default)]
    pub priorities: BTreeMap<Blockchain, i64>,
    /// Priority of chains without an entry.
    #[serde(default = "default_fallback_priority")]
    pub fallback_priority: i64,
    /// Decimal places for balance amounts.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Group amounts in thousands.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: bool,
    /// Balance file used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balances_path: Option<PathBuf>,
    /// Price file used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices_path: Option<PathBuf>,
}

const fn default_fallback_priority() -> i64 {
    DEFAULT_FALLBACK_PRIORITY
}

fn default_decimals() -> usize {
    AmountFormat::default().decimals
}

fn default_thousands_separator() -> bool {
    AmountFormat::default().thousands_separator
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            priorities: BTreeMap::new(),
            fallback_priority: default_fallback_priority(),
            decimals: default_decimals(),
            thousands_separator: default_thousands_separator(),
            balances_path: None,
            prices_path: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults silently. A file that exists but
    /// cannot be read or parsed yields the defaults with a warning.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Ok(path) => path,
                Err(err) => {
                    tracing::warn!("Config path unavailable, using defaults: {err}");
                    return Self::default();
                }
            },
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Config load failed, using defaults: {err}");
                tracing::warn!(path = %path.display(), "Config load failed: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON content cannot
    /// be parsed.
    pub fn load_from(path: &Path) -> std::result::Result<Self, WalletError> {
        let content = fs::read_to_string(path).map_err(|e| WalletError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| WalletError::parse(path, e.to_string()))
    }

    /// Saves the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds the priority table: built-in priorities, the configured
    /// fallback, then per-chain overrides.
    #[must_use]
    pub fn priority_table(&self) -> PriorityTable {
        PriorityTable::new(PriorityTable::default().entries(), self.fallback_priority)
            .with_overrides(&self.priorities)
    }

    #[must_use]
    pub const fn amount_format(&self) -> AmountFormat {
        AmountFormat::new(self.decimals, self.thousands_separator)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriorityIndex;
    use crate::test_utils::TempFile;

    #[test]
    fn test_config_defaults_and_serialization() {
        let config = AppConfig::default();
        assert!(config.priorities.is_empty());
        assert_eq!(config.fallback_priority, -99);
        assert_eq!(config.amount_format(), AmountFormat::default());

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"priorities": {"Neo": 60, "Solana": 5}}"#).unwrap();

        let table = config.priority_table();
        assert_eq!(table.priority_of(Blockchain::Neo), 60);
        // Unrecognized chains collapse onto Unknown.
        assert_eq!(table.priority_of(Blockchain::Unknown), 5);
        assert_eq!(table.priority_of(Blockchain::Osmosis), 100);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_oversized_decimals_are_clamped() {
        let config: AppConfig = serde_json::from_str(r#"{"decimals": 4000000000}"#).unwrap();
        assert_eq!(config.amount_format().decimals, crate::format::MAX_DECIMALS);
    }

    #[test]
    fn test_fallback_priority_applies_to_unlisted_chains() {
        let config = AppConfig {
            fallback_priority: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.priority_table().priority_of(Blockchain::Unknown), 0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let file = TempFile::reserve("config.json");
        let config = AppConfig {
            decimals: 4,
            balances_path: Some(PathBuf::from("/tmp/balances.json")),
            ..AppConfig::default()
        };

        config.save_to(file.path()).unwrap();
        assert_eq!(AppConfig::load(Some(file.path())), config);
    }

    #[test]
    fn test_load_missing_or_malformed_uses_defaults() {
        let missing = TempFile::reserve("missing.json");
        assert_eq!(AppConfig::load(Some(missing.path())), AppConfig::default());

        let malformed = TempFile::with_content("malformed.json", "{not json");
        assert_eq!(AppConfig::load(Some(malformed.path())), AppConfig::default());
    }
}
