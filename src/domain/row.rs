//! Display rows derived from wallet balances.

use std::fmt;

use serde::Serialize;

use super::Blockchain;

// ============================================================================
// RowKey
// ============================================================================

/// Identity of a displayed row.
///
/// Built from the balance's currency and chain, so a balance keeps its key
/// no matter where it lands after sorting. The n-th repeat of the same
/// (currency, chain) pair within one input carries a `#n` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RowKey(String);

impl RowKey {
    /// Creates the key for the first occurrence of `currency` on `chain`.
    #[must_use]
    pub fn new(currency: &str, chain: Blockchain) -> Self {
        Self(format!("{currency}@{chain}"))
    }

    /// Creates the key for the `occurrence`-th appearance (1-based) of the
    /// same currency and chain.
    #[must_use]
    pub fn with_occurrence(currency: &str, chain: Blockchain, occurrence: usize) -> Self {
        if occurrence <= 1 {
            Self::new(currency, chain)
        } else {
            Self(format!("{currency}@{chain}#{occurrence}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DisplayRow
// ============================================================================

/// A selected balance, enriched with everything needed to display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub key: RowKey,
    pub currency: String,
    pub chain: Blockchain,
    /// Chain priority the row was ranked with.
    pub priority: i64,
    pub amount: f64,
    pub formatted_amount: String,
    /// `price * amount`, in USD.
    pub usd_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_format() {
        assert_eq!(RowKey::new("OSMO", Blockchain::Osmosis).as_str(), "OSMO@Osmosis");
        assert_eq!(
            RowKey::with_occurrence("OSMO", Blockchain::Osmosis, 1),
            RowKey::new("OSMO", Blockchain::Osmosis)
        );
        assert_eq!(
            RowKey::with_occurrence("USDC", Blockchain::Arbitrum, 3).to_string(),
            "USDC@Arbitrum#3"
        );
    }

    #[test]
    fn test_same_currency_on_different_chains_differs() {
        assert_ne!(
            RowKey::new("USDC", Blockchain::Ethereum),
            RowKey::new("USDC", Blockchain::Arbitrum)
        );
    }
}
