//! UI rendering for the wallet view.
//!
//! - `header` - Title and page summary
//! - `footer` - Key hints and status
//! - `helpers` - Shared block styling
//!
//! The balance table itself is [`BalanceTableWidget`].

pub mod footer;
pub mod header;
pub mod helpers;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::state::App;
use crate::widgets::BalanceTableWidget;

use helpers::create_border_block;

/// Draws the whole view: header, balance table, footer.
///
/// Takes `app` mutably because the rows are computed lazily and the table
/// writes its scroll offset back into the selection state.
pub fn render(app: &mut App, frame: &mut Frame) {
    let [header_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    // Compute before the read-only header borrows the page.
    app.page();
    header::render(frame, header_area, app);

    let block = create_border_block("Balances", true);
    let inner = block.inner(table_area);
    frame.render_widget(block, table_area);
    let (rows, state) = app.table_parts();
    frame.render_stateful_widget(BalanceTableWidget::new(rows).focused(true), inner, state);

    footer::render(frame, footer_area, app);
}
