//! Application constants for the wallet view.

use std::time::Duration;

/// How long the event loop waits for input before redrawing.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer bar (in rows).
pub const FOOTER_HEIGHT: u16 = 1;
