//! Header rendering for the wallet view.
//!
//! Shows the title on the left and a summary of the current page on the
//! right: rows shown and hidden, the USD total and the load time.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, USD_COLOR};

use super::helpers::create_border_block;

const TITLE: &str = "Wallet";

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let [title_area, summary_area] =
        Layout::horizontal([Constraint::Length(TITLE.len() as u16 + 2), Constraint::Fill(1)])
            .areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_area);

    let summary = Paragraph::new(summary_line(app)).alignment(Alignment::Right);
    frame.render_widget(summary, summary_area);
}

fn summary_line(app: &App) -> Line<'static> {
    let page = app.last_page();
    let muted = Style::default().fg(MUTED_COLOR);
    let loaded = app.loaded_at.map_or_else(
        || "not loaded".to_string(),
        |at| format!("loaded {}", at.format("%H:%M:%S")),
    );

    Line::from(vec![
        Span::raw(format!("{} shown", page.stats.kept)),
        Span::styled(format!("  {} hidden  ", page.stats.hidden()), muted),
        Span::styled(
            format!("Total {}", app.data.format.format_usd(page.total_usd())),
            Style::default().fg(USD_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {loaded}"), muted),
    ])
}
