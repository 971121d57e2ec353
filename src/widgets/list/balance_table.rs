//! Balance table widget.
//!
//! Displays rendered balance rows with a selection indicator and a scrollbar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Row, StatefulWidget, Table, TableState},
};

use crate::render::{HEADERS, RenderableRow};
use crate::theme::{HEADER_ROW_STYLE, HIGHLIGHT_STYLE};

use super::state::{BalanceTableState, render_list_scrollbar};

/// Rows taken by the header line and the gap below it.
const HEADER_HEIGHT: u16 = 2;

// ============================================================================
// BalanceTableWidget
// ============================================================================

/// A widget that displays balance rows with selection and scrolling.
///
/// # Example
///
/// ```text
///    Currency   Chain          Amount     USD Value
///
/// ▶  OSMO       Osmosis         10.00         $3.70
///    ETH        Ethereum         1.25     $2,057.41
///    ZIL        Zilliqa      5,000.00       $100.00
/// ```
#[derive(Debug)]
pub struct BalanceTableWidget<'a> {
    rows: &'a [RenderableRow],
    focused: bool,
}

impl<'a> BalanceTableWidget<'a> {
    #[must_use]
    pub const fn new(rows: &'a [RenderableRow]) -> Self {
        Self {
            rows,
            focused: false,
        }
    }

    /// When focused, the scrollbar is rendered if content exceeds the
    /// viewport.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for BalanceTableWidget<'_> {
    type State = BalanceTableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.rows.is_empty() {
            let empty_msg = "No balances to display";
            let x = area.x + (area.width.saturating_sub(empty_msg.len() as u16)) / 2;
            let y = area.y + area.height / 2;

            if y < area.y + area.height && x < area.x + area.width {
                buf.set_string(x, y, empty_msg, Style::default().fg(Color::Gray));
            }
            state.offset = 0;
            return;
        }

        state.sync(self.rows);

        let header = Row::new(HEADERS.map(Line::from))
            .style(HEADER_ROW_STYLE)
            .bottom_margin(1);
        let table = Table::new(
            self.rows.iter().map(RenderableRow::to_table_row),
            [
                Constraint::Min(10),
                Constraint::Length(10),
                Constraint::Length(18),
                Constraint::Length(18),
            ],
        )
        .header(header)
        .column_spacing(2)
        .highlight_symbol("▶ ")
        .row_highlight_style(HIGHLIGHT_STYLE);

        let mut table_state = TableState::default()
            .with_offset(state.offset)
            .with_selected(state.selected_index(self.rows));
        StatefulWidget::render(table, area, buf, &mut table_state);
        state.offset = table_state.offset();

        let viewport_items = area.height.saturating_sub(HEADER_HEIGHT) as usize;
        if self.focused {
            render_list_scrollbar(
                area,
                buf,
                self.rows.len(),
                viewport_items,
                state.offset,
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
