//! Domain types for the wallet view.
//!
//! # Module Organization
//!
//! - [`blockchain`] - The closed set of supported chains
//! - [`balance`] - Wallet balance records as loaded from disk
//! - [`row`] - Display rows and their stable keys
//! - [`error`] - Errors raised while loading inputs

// ============================================================================
// Module Declarations
// ============================================================================

pub mod balance;
pub mod blockchain;
pub mod error;
pub mod row;

// ============================================================================
// Re-exports
// ============================================================================

pub use balance::WalletBalance;
pub use blockchain::Blockchain;
pub use error::WalletError;
pub use row::{DisplayRow, RowKey};
