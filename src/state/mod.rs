//! State management for the wallet view.
//!
//! - [`DataState`] - Pipeline inputs (balances, prices, priorities, format)
//! - [`AppConfig`] - Persistent configuration
//! - [`App`] - Top-level state: inputs, cached rows, selection, status
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! ├───────────────┬──────────────┬───────────────┤
//! │   DataState   │ RowCache     │ Selection     │
//! │  - balances   │  - revision  │  - row key    │
//! │  - prices     │  - rows      │  - offset     │
//! │  - priorities │  - stats     │               │
//! └───────────────┴──────────────┴───────────────┘
//! ```
//!
//! Every change to [`DataState`] bumps the revision; rows are recomputed
//! lazily the next time they are read.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::domain::WalletError;
use crate::memo::{Revision, RowCache};
use crate::pricing::PriorityTable;
use crate::render::RenderableRow;
use crate::widgets::BalanceTableState;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;

pub mod config;
pub mod data;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{DataState, InputSources, PageRows};

/// Shown when nothing has been computed yet.
static EMPTY_PAGE: PageRows = PageRows {
    rows: Vec::new(),
    rendered: Vec::new(),
    stats: crate::selector::SelectionStats {
        total: 0,
        kept: 0,
        excluded_amount: 0,
        excluded_priority: 0,
    },
};

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
///
/// Paths given here take precedence over the ones in the configuration file.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Balance file to load.
    pub balances_path: Option<PathBuf>,
    /// Price file to load.
    pub prices_path: Option<PathBuf>,
    /// Configuration file to use instead of the default location.
    pub config_path: Option<PathBuf>,
}

impl StartupOptions {
    /// Input paths, falling back to the ones in `config`.
    #[must_use]
    pub fn sources(&self, config: &AppConfig) -> InputSources {
        InputSources {
            balances_path: self
                .balances_path
                .clone()
                .or_else(|| config.balances_path.clone()),
            prices_path: self
                .prices_path
                .clone()
                .or_else(|| config.prices_path.clone()),
        }
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// One-line status shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Pipeline inputs.
    pub data: DataState,

    /// Where inputs are loaded from.
    pub sources: InputSources,

    /// Configuration file re-read on reload, if any.
    pub(crate) config_path: Option<PathBuf>,

    /// Rows derived from `data` for `revision`.
    cache: RowCache<PageRows>,

    /// Bumped on every change to `data`.
    revision: Revision,

    /// Key-based table selection.
    pub table_state: BalanceTableState,

    /// Last status message.
    pub status: Option<StatusMessage>,

    /// When inputs were last loaded successfully.
    pub loaded_at: Option<DateTime<Local>>,

    /// Whether the application should exit.
    pub exit: bool,
}

impl App {
    /// Creates the application state and performs the initial load.
    ///
    /// A failed initial load is reported through [`App::status`] rather than
    /// aborting, so the view still opens.
    #[must_use]
    pub fn new(options: StartupOptions) -> Self {
        let config = AppConfig::load(options.config_path.as_deref());
        let sources = options.sources(&config);
        let mut app = Self::with_data(DataState::from_config(&config), sources);
        app.config_path = options.config_path;
        if let Err(err) = app.load_inputs() {
            app.status = Some(StatusMessage::Error(err.to_string()));
        }
        app
    }

    /// Creates the application state around already loaded inputs.
    #[must_use]
    pub fn with_data(data: DataState, sources: InputSources) -> Self {
        Self {
            data,
            sources,
            config_path: None,
            cache: RowCache::new(),
            revision: Revision::default(),
            table_state: BalanceTableState::new(),
            status: None,
            loaded_at: None,
            exit: false,
        }
    }

    /// Returns the rows for the current inputs, recomputing if they changed.
    pub fn page(&mut self) -> &PageRows {
        let data = &self.data;
        self.cache
            .get_or_compute(self.revision, || data.build_page())
    }

    /// Returns the most recently computed rows without recomputing.
    #[must_use]
    pub fn last_page(&self) -> &PageRows {
        self.cache.latest().unwrap_or(&EMPTY_PAGE)
    }

    /// Returns the rendered rows together with the selection state, for
    /// drawing the table.
    pub fn table_parts(&mut self) -> (&[RenderableRow], &mut BalanceTableState) {
        let data = &self.data;
        let page = self
            .cache
            .get_or_compute(self.revision, || data.build_page());
        (&page.rendered, &mut self.table_state)
    }

    /// Returns the row under the selection, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&crate::domain::DisplayRow> {
        let key = self.table_state.selected_key()?;
        self.last_page().rows.iter().find(|row| &row.key == key)
    }

    /// Replaces the chain priorities.
    pub fn set_priorities(&mut self, priorities: PriorityTable) {
        self.data.priorities = priorities;
        self.touch();
    }

    /// Re-reads the configuration file (if one is known), then balances and
    /// prices.
    ///
    /// A configuration file that has been removed yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the first load error. Nothing is applied unless the
    /// configuration and every input file load, so the previous priorities,
    /// format and inputs stay in place.
    pub fn reload(&mut self) -> Result<(), WalletError> {
        let config = match &self.config_path {
            Some(path) if path.exists() => Some(AppConfig::load_from(path)?),
            Some(_) => Some(AppConfig::default()),
            None => None,
        };
        self.data.load(&self.sources)?;
        if let Some(config) = config {
            self.data.format = config.amount_format();
            self.set_priorities(config.priority_table());
        }
        self.finish_load();
        Ok(())
    }

    fn load_inputs(&mut self) -> Result<(), WalletError> {
        self.data.load(&self.sources)?;
        self.finish_load();
        Ok(())
    }

    fn finish_load(&mut self) {
        self.loaded_at = Some(Local::now());
        self.touch();
        let count = self.page().rows.len();
        self.status = Some(StatusMessage::Info(format!("Loaded {count} rows")));
    }

    /// Marks the inputs as changed.
    fn touch(&mut self) {
        self.revision = self.revision.next();
    }
}

// ============================================================================
// Tests
// ============================================================================
