//! Command execution for the wallet view.
//!
//! Keyboard input is mapped to an [`AppCommand`] and applied to [`App`].

use crossterm::event::KeyEvent;

use super::{App, StatusMessage};
use crate::commands::{AppCommand, KeyMapper};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let command = KeyMapper::map_key(key_event);
        self.apply(command);
    }

    /// Applies a single command to the application state.
    pub fn apply(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::Reload => {
                if let Err(err) = self.reload() {
                    tracing::warn!("Reload failed: {err}");
                    self.status = Some(StatusMessage::Error(err.to_string()));
                }
            }
            AppCommand::MoveUp => {
                let (rows, state) = self.table_parts();
                state.move_up(rows);
            }
            AppCommand::MoveDown => {
                let (rows, state) = self.table_parts();
                state.move_down(rows);
            }
            AppCommand::First => {
                let (rows, state) = self.table_parts();
                state.select_first(rows);
            }
            AppCommand::Last => {
                let (rows, state) = self.table_parts();
                state.select_last(rows);
            }
            AppCommand::Noop => {}
        }
    }
}
