//! Wallet balance records as they enter the application.

use serde::{Deserialize, Serialize};

use super::Blockchain;

/// One holding of `currency` on `chain`.
///
/// Balance files use the field name `blockchain`; `chain` is accepted as an
/// alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    /// Currency identifier, e.g. `"OSMO"`.
    pub currency: String,
    /// Chain holding the balance.
    #[serde(rename = "blockchain", alias = "chain")]
    pub chain: Blockchain,
    /// Quantity held, in whole units of `currency`.
    pub amount: f64,
}

impl WalletBalance {
    #[cfg(test)]
    #[must_use]
    pub fn new(currency: impl Into<String>, chain: Blockchain, amount: f64) -> Self {
        Self {
            currency: currency.into(),
            chain,
            amount,
        }
    }

    /// Returns `true` if the amount is a finite, strictly positive quantity.
    #[must_use]
    pub fn has_positive_amount(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0
    }
}
