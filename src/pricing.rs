//! Lookup capabilities injected into the balance selector.
//!
//! [`PriorityIndex`] ranks chains and [`PriceOracle`] values currencies. Both
//! are total: a lookup miss yields a fallback value instead of an error.
//! Closures implement both traits, which keeps tests and ad-hoc callers free
//! of table setup.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::domain::Blockchain;

// ============================================================================
// Constants
// ============================================================================

/// Priority given to chains with no explicit entry, including
/// [`Blockchain::Unknown`].
pub const DEFAULT_FALLBACK_PRIORITY: i64 = -99;

// ============================================================================
// PriorityIndex
// ============================================================================

/// Maps a chain to its display priority. Higher is shown first.
pub trait PriorityIndex {
    fn priority_of(&self, chain: Blockchain) -> i64;
}

impl<F> PriorityIndex for F
where
    F: Fn(Blockchain) -> i64,
{
    fn priority_of(&self, chain: Blockchain) -> i64 {
        self(chain)
    }
}

/// Table-backed [`PriorityIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    entries: BTreeMap<Blockchain, i64>,
    fallback: i64,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new(
            [
                (Blockchain::Osmosis, 100),
                (Blockchain::Ethereum, 50),
                (Blockchain::Arbitrum, 30),
                (Blockchain::Zilliqa, 20),
                (Blockchain::Neo, 20),
            ],
            DEFAULT_FALLBACK_PRIORITY,
        )
    }
}

impl PriorityTable {
    /// Creates a table from explicit entries and a fallback for everything
    /// else.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (Blockchain, i64)>, fallback: i64) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Overrides individual entries, keeping the rest.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<Blockchain, i64>) -> Self {
        self.entries
            .extend(overrides.iter().map(|(chain, priority)| (*chain, *priority)));
        self
    }

    /// Iterates over the explicit entries in chain order.
    pub fn entries(&self) -> impl Iterator<Item = (Blockchain, i64)> + '_ {
        self.entries.iter().map(|(chain, priority)| (*chain, *priority))
    }
}

impl PriorityIndex for PriorityTable {
    fn priority_of(&self, chain: Blockchain) -> i64 {
        self.entries.get(&chain).copied().unwrap_or(self.fallback)
    }
}

// ============================================================================
// PriceOracle
// ============================================================================

/// Maps a currency to its USD price per unit. Never negative.
pub trait PriceOracle {
    fn price_of(&self, currency: &str) -> f64;
}

impl<F> PriceOracle for F
where
    F: Fn(&str) -> f64,
{
    fn price_of(&self, currency: &str) -> f64 {
        self(currency)
    }
}

/// One entry of a price list file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceEntry {
    pub currency: String,
    pub price: f64,
}

/// Table-backed [`PriceOracle`].
///
/// Prices that are negative or not finite are dropped on insertion, so a
/// lookup on them behaves like a miss and yields `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a price. Returns `false` if the price was rejected.
    pub fn insert(&mut self, currency: impl Into<String>, price: f64) -> bool {
        let currency = currency.into();
        if !price.is_finite() || price < 0.0 {
            tracing::debug!("Rejecting price {price} for {currency}");
            return false;
        }
        self.prices.insert(currency, price);
        true
    }

    /// Returns the stored price, if any.
    #[must_use]
    pub fn get(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (currency, price) in iter {
            table.insert(currency, price);
        }
        table
    }
}

impl From<Vec<PriceEntry>> for PriceTable {
    fn from(entries: Vec<PriceEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.currency, entry.price))
            .collect()
    }
}

impl PriceOracle for PriceTable {
    fn price_of(&self, currency: &str) -> f64 {
        self.get(currency).unwrap_or_else(|| {
            tracing::debug!("No price for {currency}, using 0");
            0.0
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
