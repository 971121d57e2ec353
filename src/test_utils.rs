//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting balance fixtures and terminal
//! setup across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::domain::{Blockchain, DisplayRow, RowKey, WalletBalance};
use crate::format::AmountFormat;
use crate::pricing::PriceTable;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct BalanceMother;

impl BalanceMother {
    /// A wallet touching every chain, with entries the selector must drop:
    /// a zero amount, a negative amount and an unknown chain.
    #[must_use]
    pub fn mixed_wallet() -> Vec<WalletBalance> {
        vec![
            WalletBalance::new("ZIL", Blockchain::Zilliqa, 5_000.0),
            WalletBalance::new("ETH", Blockchain::Ethereum, 1.25),
            WalletBalance::new("SOL", Blockchain::Unknown, 12.0),
            WalletBalance::new("OSMO", Blockchain::Osmosis, 10.0),
            WalletBalance::new("USDC", Blockchain::Arbitrum, 0.0),
            WalletBalance::new("NEO", Blockchain::Neo, 3.0),
            WalletBalance::new("ARB", Blockchain::Arbitrum, -4.0),
            WalletBalance::new("USDC", Blockchain::Ethereum, 250.0),
        ]
    }

    /// Prices for every currency in [`BalanceMother::mixed_wallet`] except
    /// `NEO`.
    #[must_use]
    pub fn prices() -> PriceTable {
        [
            ("ZIL", 0.02),
            ("ETH", 1645.93),
            ("SOL", 21.5),
            ("OSMO", 0.37),
            ("USDC", 1.0),
            ("ARB", 1.1),
        ]
        .into_iter()
        .collect()
    }
}

pub struct DisplayRowMother;

impl DisplayRowMother {
    /// A row with the given USD value and default formatting.
    #[must_use]
    pub fn row(currency: &str, chain: Blockchain, amount: f64, usd_value: f64) -> DisplayRow {
        DisplayRow {
            key: RowKey::new(currency, chain),
            currency: currency.to_string(),
            chain,
            priority: 0,
            amount,
            formatted_amount: AmountFormat::default().format_amount(amount),
            usd_value,
        }
    }
}

// ============================================================================
// Temporary Files
// ============================================================================

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A file in the system temp directory, removed on drop.
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    #[must_use]
    pub fn with_content(name: &str, content: &str) -> Self {
        let unique = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "wallet-page-{}-{unique}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, content).expect("temp file should be writable");
        Self { path }
    }

    /// A path in the temp directory that does not exist yet.
    #[must_use]
    pub fn reserve(name: &str) -> Self {
        let file = Self::with_content(name, "");
        let _ = std::fs::remove_file(&file.path);
        file
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

// ============================================================================
// Terminal Fixtures
// ============================================================================

/// Wide enough for the four table columns and the selection symbol, tall
/// enough for [`BalanceMother::mixed_wallet`] without scrolling.
#[fixture]
pub fn test_terminal_66x13() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(66, 13)).expect("terminal creation should succeed")
}

/// Flattens a buffer into newline-separated rows of symbols.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}
