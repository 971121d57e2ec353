//! Error types for loading wallet data.
//!
//! The selection pipeline itself never fails. These errors only arise at the
//! edges, when balance, price or configuration files are read.

use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while reading external wallet inputs.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not valid.
    #[error("Parse error in {}: {message}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WalletError {
    /// Create a new I/O error for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a new parse error for `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - The file whose contents failed to parse
    /// * `message` - Description of what failed to parse
    #[must_use]
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
