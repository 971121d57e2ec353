//! Command pattern for key event handling.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], which keeps
//! key mappings testable without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let command = KeyMapper::map_key(key_event);
//! app.apply(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// Re-read configuration, balances and prices from disk.
    Reload,
    /// Move selection up.
    MoveUp,
    /// Move selection down.
    MoveDown,
    /// Jump to the first row.
    First,
    /// Jump to the last row.
    Last,
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// Key releases and repeats reported by some terminals map to
    /// [`AppCommand::Noop`] so each press acts once.
    #[must_use]
    pub fn map_key(key: KeyEvent) -> AppCommand {
        if key.kind != KeyEventKind::Press {
            return AppCommand::Noop;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => AppCommand::Quit,
                _ => AppCommand::Noop,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Reload,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::First,
            KeyCode::End | KeyCode::Char('G') => AppCommand::Last,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
