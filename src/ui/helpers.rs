//! UI helper functions for creating styled blocks.

use ratatui::{
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, MUTED_COLOR};

/// Creates a bordered block whose look depends on focus.
///
/// Focused blocks get a double border and a highlighted title; others get a
/// rounded, muted border. An empty `title` renders no title at all.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block
            .border_set(border::DOUBLE)
            .border_style(FOCUSED_BORDER_STYLE)
            .title_style(FOCUSED_TITLE_STYLE)
    } else {
        block
            .border_set(border::ROUNDED)
            .border_style(BORDER_STYLE)
            .title_style(Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD))
    }
}
