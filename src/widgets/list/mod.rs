//! List widgets for displaying balances.
//!
//! - [`BalanceTableWidget`]: Displays balance rows with selection highlighting
//! - [`BalanceTableState`]: Key-based selection state for the table

mod balance_table;
mod state;

pub use balance_table::BalanceTableWidget;
pub use state::BalanceTableState;
