//! Theme and styling constants for the wallet view.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Currency symbol column.
pub const CURRENCY_COLOR: Color = Color::Cyan;

/// Chain name column.
pub const CHAIN_COLOR: Color = Color::Magenta;

/// USD value column.
pub const USD_COLOR: Color = Color::Green;

// ============================================================================
// Style Constants
// ============================================================================

/// Border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Table header row.
pub const HEADER_ROW_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for highlighted items with emphasis.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
