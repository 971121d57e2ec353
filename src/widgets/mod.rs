//! Widget components for the wallet view.
//!
//! - [`list`]: The balance table and its selection state

pub mod list;

pub use list::{BalanceTableState, BalanceTableWidget};
