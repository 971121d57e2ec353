//! Supported blockchains.
//!
//! Chain identifiers arrive as free-form strings in balance files and
//! configuration. They are mapped onto the closed [`Blockchain`] enum exactly
//! once, at deserialization time; anything unrecognized becomes
//! [`Blockchain::Unknown`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Blockchain
// ============================================================================

/// A blockchain a balance can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    /// Remap target for identifiers outside the supported set.
    Unknown,
}

impl Blockchain {
    /// The supported chains, excluding [`Blockchain::Unknown`].
    pub const ALL: [Self; 5] = [
        Self::Osmosis,
        Self::Ethereum,
        Self::Arbitrum,
        Self::Zilliqa,
        Self::Neo,
    ];

    /// Returns the canonical name of the chain.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Osmosis => "Osmosis",
            Self::Ethereum => "Ethereum",
            Self::Arbitrum => "Arbitrum",
            Self::Zilliqa => "Zilliqa",
            Self::Neo => "Neo",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns `true` for every chain except [`Blockchain::Unknown`].
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Blockchain {
    type Err = std::convert::Infallible;

    /// Case-insensitive match on the canonical names. Never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ok(Self::ALL
            .into_iter()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Unknown))
    }
}

impl Serialize for Blockchain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Blockchain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let chain = raw.parse().unwrap_or(Self::Unknown);
        if !chain.is_known() {
            tracing::debug!("Unrecognized chain identifier '{raw}', treating as Unknown");
        }
        Ok(chain)
    }
}

// ============================================================================
// Tests
// ============================================================================
