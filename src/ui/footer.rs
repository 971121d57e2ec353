//! Footer bar with key hints and the latest status message.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

pub const KEY_HINTS: &str = "q:Quit  r:Reload  ↑↓/jk:Move  g/G:First/Last";

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [hints_area, status_area] = Layout::horizontal([
        Constraint::Length(KEY_HINTS.chars().count() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);

    let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(MUTED_COLOR));
    frame.render_widget(hints, hints_area);

    if let Some(status) = &app.status {
        let color = if status.is_error() {
            WARNING_COLOR
        } else {
            PRIMARY_COLOR
        };
        let status = Paragraph::new(status.text().to_string())
            .style(Style::default().fg(color))
            .alignment(Alignment::Right);
        frame.render_widget(status, status_area);
    }
}
