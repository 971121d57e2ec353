//! Balance selection: filter, rank and enrich wallet balances.
//!
//! [`select`] turns raw balances into the ordered [`DisplayRow`]s shown to
//! the user:
//!
//! 1. A balance is kept only if its chain priority is above [`THRESHOLD`] and
//!    its amount is a finite, positive quantity.
//! 2. Each kept balance is enriched into its final row in the same traversal
//!    (formatted amount, USD value, stable key).
//! 3. Rows are stably sorted by descending priority, so balances of equal
//!    priority keep their input order.
//!
//! The function is pure and total. Unknown chains and unpriced currencies
//! resolve to the fallbacks of the supplied capabilities.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::domain::{Blockchain, DisplayRow, RowKey, WalletBalance};
use crate::format::AmountFormat;
use crate::pricing::{PriceOracle, PriorityIndex};

/// Priorities at or below this value are never displayed.
pub const THRESHOLD: i64 = -99;

/// Counters describing one selection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Balances in the input.
    pub total: usize,
    /// Balances that became rows.
    pub kept: usize,
    /// Balances dropped for a zero, negative or non-finite amount.
    pub excluded_amount: usize,
    /// Balances dropped for a priority at or below [`THRESHOLD`].
    pub excluded_priority: usize,
}

impl SelectionStats {
    /// Balances that did not become rows.
    #[must_use]
    pub const fn hidden(&self) -> usize {
        self.excluded_amount + self.excluded_priority
    }
}

/// Selects and orders the balances to display.
#[must_use]
pub fn select(
    balances: &[WalletBalance],
    prices: &impl PriceOracle,
    priorities: &impl PriorityIndex,
    format: &AmountFormat,
) -> Vec<DisplayRow> {
    select_with_stats(balances, prices, priorities, format).0
}

/// Like [`select`], also reporting how many balances were excluded and why.
#[must_use]
pub fn select_with_stats(
    balances: &[WalletBalance],
    prices: &impl PriceOracle,
    priorities: &impl PriorityIndex,
    format: &AmountFormat,
) -> (Vec<DisplayRow>, SelectionStats) {
    let mut stats = SelectionStats {
        total: balances.len(),
        ..SelectionStats::default()
    };
    // Occurrences are counted over the whole input so a key never depends on
    // which other balances were filtered out.
    let mut occurrences: HashMap<(&str, Blockchain), usize> = HashMap::new();

    let mut rows: Vec<DisplayRow> = balances
        .iter()
        .filter_map(|balance| {
            let occurrence = *occurrences
                .entry((balance.currency.as_str(), balance.chain))
                .and_modify(|count| *count += 1)
                .or_insert(1);

            let priority = priorities.priority_of(balance.chain);
            if priority <= THRESHOLD {
                stats.excluded_priority += 1;
                return None;
            }
            if !balance.has_positive_amount() {
                stats.excluded_amount += 1;
                return None;
            }

            Some(DisplayRow {
                key: RowKey::with_occurrence(&balance.currency, balance.chain, occurrence),
                currency: balance.currency.clone(),
                chain: balance.chain,
                priority,
                amount: balance.amount,
                formatted_amount: format.format_amount(balance.amount),
                usd_value: prices.price_of(&balance.currency) * balance.amount,
            })
        })
        .collect();

    rows.sort_by_key(|row| Reverse(row.priority));
    stats.kept = rows.len();

    tracing::debug!(
        total = stats.total,
        kept = stats.kept,
        excluded_amount = stats.excluded_amount,
        excluded_priority = stats.excluded_priority,
        "Selected balances"
    );

    (rows, stats)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::pricing::{PriceTable, PriorityTable};
    use crate::test_utils::BalanceMother;
    use rstest::rstest;

    fn scenario_priority(chain: Blockchain) -> i64 {
        match chain {
            Blockchain::Osmosis => 100,
            Blockchain::Ethereum => 50,
            Blockchain::Zilliqa => -100,
            _ => THRESHOLD,
        }
    }

    fn scenario_price(currency: &str) -> f64 {
        match currency {
            "OSMO" => 1.0,
            "ZIL" => 0.02,
            _ => 0.0,
        }
    }

    #[test]
    fn test_reviewed_scenario_keeps_only_osmo() {
        let balances = vec![
            WalletBalance::new("OSMO", Blockchain::Osmosis, 10.0),
            WalletBalance::new("ETH", Blockchain::Ethereum, -1.0),
            WalletBalance::new("ZIL", Blockchain::Zilliqa, 5.0),
        ];

        let (rows, stats) = select_with_stats(
            &balances,
            &scenario_price,
            &scenario_priority,
            &AmountFormat::default(),
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].currency, "OSMO");
        assert_eq!(rows[0].usd_value, 10.0);
        assert_eq!(rows[0].formatted_amount, "10.00");
        assert_eq!(rows[0].key, RowKey::new("OSMO", Blockchain::Osmosis));
        assert_eq!(
            stats,
            SelectionStats {
                total: 3,
                kept: 1,
                excluded_amount: 1,
                excluded_priority: 1,
            }
        );
        assert_eq!(stats.hidden(), 2);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_malformed_amounts_are_excluded(#[case] amount: f64) {
        let balances = vec![WalletBalance::new("ETH", Blockchain::Ethereum, amount)];
        let rows = select(
            &balances,
            &PriceTable::new(),
            &PriorityTable::default(),
            &AmountFormat::default(),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive_and_unknown_chain_is_hidden() {
        let balances = vec![
            WalletBalance::new("AT", Blockchain::Neo, 1.0),
            WalletBalance::new("ABOVE", Blockchain::Arbitrum, 1.0),
            WalletBalance::new("SOL", Blockchain::Unknown, 1.0),
        ];
        let priorities = |chain: Blockchain| -> i64 {
            match chain {
                Blockchain::Neo => THRESHOLD,
                Blockchain::Arbitrum => THRESHOLD + 1,
                _ => 0,
            }
        };

        let rows = select(&balances, &PriceTable::new(), &priorities, &AmountFormat::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].currency, "SOL");
        assert_eq!(rows[1].currency, "ABOVE");

        let rows = select(
            &balances,
            &PriceTable::new(),
            &PriorityTable::default(),
            &AmountFormat::default(),
        );
        assert!(rows.iter().all(|row| row.chain != Blockchain::Unknown));
    }

    #[test]
    fn test_sorted_by_descending_priority_with_stable_ties() {
        let balances = BalanceMother::mixed_wallet();
        let rows = select(
            &balances,
            &PriceTable::new(),
            &PriorityTable::default(),
            &AmountFormat::default(),
        );

        assert!(rows.windows(2).all(|w| w[0].priority >= w[1].priority));

        // Zilliqa and Neo share priority 20; ZIL precedes NEO in the input.
        let tied: Vec<&str> = rows
            .iter()
            .filter(|row| row.priority == 20)
            .map(|row| row.currency.as_str())
            .collect();
        assert_eq!(tied, vec!["ZIL", "NEO"]);
    }

    #[test]
    fn test_equal_priority_same_chain_keeps_input_order() {
        let balances = vec![
            WalletBalance::new("USDC", Blockchain::Ethereum, 5.0),
            WalletBalance::new("OSMO", Blockchain::Osmosis, 1.0),
            WalletBalance::new("ETH", Blockchain::Ethereum, 2.0),
            WalletBalance::new("WBTC", Blockchain::Ethereum, 0.1),
        ];
        let rows = select(
            &balances,
            &PriceTable::new(),
            &PriorityTable::default(),
            &AmountFormat::default(),
        );

        let order: Vec<&str> = rows.iter().map(|row| row.currency.as_str()).collect();
        assert_eq!(order, vec!["OSMO", "USDC", "ETH", "WBTC"]);
    }

    #[test]
    fn test_usd_value_is_exact_product() {
        let balances = BalanceMother::mixed_wallet();
        let prices = BalanceMother::prices();
        let rows = select(
            &balances,
            &prices,
            &PriorityTable::default(),
            &AmountFormat::default(),
        );

        assert!(!rows.is_empty());
        for row in &rows {
            assert_eq!(row.usd_value, prices.price_of(&row.currency) * row.amount);
        }
    }

    #[test]
    fn test_every_row_passes_predicate() {
        let balances = BalanceMother::mixed_wallet();
        let priorities = PriorityTable::default();
        let rows = select(
            &balances,
            &BalanceMother::prices(),
            &priorities,
            &AmountFormat::default(),
        );

        for row in &rows {
            assert!(row.amount > 0.0);
            assert!(priorities.priority_of(row.chain) > THRESHOLD);
            assert_eq!(row.priority, priorities.priority_of(row.chain));
        }
    }

    #[test]
    fn test_keys_are_distinct_and_stable_under_reordering() {
        let balances = BalanceMother::mixed_wallet();
        let mut reversed = balances.clone();
        reversed.reverse();

        let format = AmountFormat::default();
        let priorities = PriorityTable::default();
        let prices = BalanceMother::prices();
        let forward = select(&balances, &prices, &priorities, &format);
        let backward = select(&reversed, &prices, &priorities, &format);

        let keys: HashSet<&RowKey> = forward.iter().map(|row| &row.key).collect();
        assert_eq!(keys.len(), forward.len());

        let key_to_currency = |rows: &[DisplayRow]| -> HashMap<RowKey, String> {
            rows.iter()
                .map(|row| (row.key.clone(), row.currency.clone()))
                .collect()
        };
        assert_eq!(key_to_currency(&forward[..]), key_to_currency(&backward[..]));
    }

    #[test]
    fn test_duplicate_balances_get_distinct_keys() {
        let balances = vec![
            WalletBalance::new("USDC", Blockchain::Arbitrum, 1.0),
            WalletBalance::new("USDC", Blockchain::Ethereum, 2.0),
            WalletBalance::new("USDC", Blockchain::Arbitrum, 3.0),
        ];
        let rows = select(
            &balances,
            &PriceTable::new(),
            &PriorityTable::default(),
            &AmountFormat::default(),
        );

        let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["USDC@Ethereum", "USDC@Arbitrum", "USDC@Arbitrum#2"]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let balances = BalanceMother::mixed_wallet();
        let prices = BalanceMother::prices();
        let priorities = PriorityTable::default();
        let format = AmountFormat::default();

        assert_eq!(
            select(&balances, &prices, &priorities, &format),
            select(&balances, &prices, &priorities, &format)
        );
    }

    #[test]
    fn test_empty_input() {
        let (rows, stats) = select_with_stats(
            &[],
            &PriceTable::new(),
            &PriorityTable::default(),
            &AmountFormat::default(),
        );
        assert!(rows.is_empty());
        assert_eq!(stats, SelectionStats::default());
    }
}
