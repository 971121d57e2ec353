//! Wallet input data and its derived page of rows.

use std::path::PathBuf;

use super::AppConfig;
use crate::domain::{DisplayRow, WalletBalance, WalletError};
use crate::format::AmountFormat;
use crate::pricing::{PriceTable, PriorityTable};
use crate::render::{self, RenderableRow};
use crate::selector::{self, SelectionStats};
use crate::source;

// ============================================================================
// InputSources
// ============================================================================

/// Where balances and prices are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSources {
    pub balances_path: Option<PathBuf>,
    pub prices_path: Option<PathBuf>,
}

// ============================================================================
// DataState
// ============================================================================

/// The inputs of the selection pipeline.
#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub balances: Vec<WalletBalance>,
    pub prices: PriceTable,
    pub priorities: PriorityTable,
    pub format: AmountFormat,
}

impl DataState {
    /// Empty inputs with the priorities and format from `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            priorities: config.priority_table(),
            format: config.amount_format(),
            ..Self::default()
        }
    }

    /// Reads balances and prices from `sources`.
    ///
    /// A source without a path yields empty data. Nothing is replaced unless
    /// every configured file loads.
    ///
    /// # Errors
    ///
    /// Returns the first load error encountered.
    pub fn load(&mut self, sources: &InputSources) -> Result<(), WalletError> {
        let balances = match &sources.balances_path {
            Some(path) => source::load_balances(path)?,
            None => Vec::new(),
        };
        let prices = match &sources.prices_path {
            Some(path) => source::load_prices(path)?,
            None => PriceTable::new(),
        };
        self.balances = balances;
        self.prices = prices;
        Ok(())
    }

    /// Runs the selection pipeline over the current inputs.
    #[must_use]
    pub fn build_page(&self) -> PageRows {
        let (rows, stats) = selector::select_with_stats(
            &self.balances,
            &self.prices,
            &self.priorities,
            &self.format,
        );
        let rendered = render::render(&rows, &self.format);
        PageRows {
            rows,
            rendered,
            stats,
        }
    }
}

// ============================================================================
// PageRows
// ============================================================================

/// Everything the view needs for one revision of the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRows {
    pub rows: Vec<DisplayRow>,
    pub rendered: Vec<RenderableRow>,
    pub stats: SelectionStats,
}

impl PageRows {
    /// Sum of the USD values of all displayed rows.
    #[must_use]
    pub fn total_usd(&self) -> f64 {
        self.rows.iter().map(|row| row.usd_value).sum()
    }
}
