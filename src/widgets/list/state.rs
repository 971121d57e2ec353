//! Selection state for the balance table.
//!
//! Selection is tracked by [`RowKey`], not by position. When the rows are
//! re-sorted (a priority change, a reload) the same balance stays selected
//! wherever it moved to.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::scrollbar,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use crate::domain::RowKey;
use crate::render::RenderableRow;

// ============================================================================
// BalanceTableState
// ============================================================================

/// State for the balance table widget.
///
/// # Example
///
/// ```ignore
/// use crate::widgets::list::BalanceTableState;
///
/// let mut state = BalanceTableState::new();
/// state.select_first(&rows);
/// state.move_down(&rows);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BalanceTableState {
    /// Key of the selected row.
    selected: Option<RowKey>,
    /// Position of the selected row when it was last seen, used to pick a
    /// neighbour if the row disappears.
    last_index: usize,
    /// First visible row.
    pub offset: usize,
}

impl BalanceTableState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            last_index: 0,
            offset: 0,
        }
    }

    /// Returns the key of the selected row.
    #[must_use]
    pub const fn selected_key(&self) -> Option<&RowKey> {
        self.selected.as_ref()
    }

    /// Returns the position of the selected row in `rows`, if it is present.
    #[must_use]
    pub fn selected_index(&self, rows: &[RenderableRow]) -> Option<usize> {
        let key = self.selected.as_ref()?;
        rows.iter().position(|row| &row.key == key)
    }

    /// Selects the row at `index`, or clears the selection if out of range.
    pub fn select_index(&mut self, rows: &[RenderableRow], index: usize) {
        match rows.get(index) {
            Some(row) => {
                self.selected = Some(row.key.clone());
                self.last_index = index;
            }
            None => self.selected = None,
        }
    }

    pub fn select_first(&mut self, rows: &[RenderableRow]) {
        self.select_index(rows, 0);
    }

    pub fn select_last(&mut self, rows: &[RenderableRow]) {
        self.select_index(rows, rows.len().saturating_sub(1));
    }

    pub fn move_up(&mut self, rows: &[RenderableRow]) {
        if let Some(index) = self.resolve(rows) {
            self.select_index(rows, index.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self, rows: &[RenderableRow]) {
        if let Some(index) = self.resolve(rows) {
            self.select_index(rows, (index + 1).min(rows.len() - 1));
        }
    }

    /// Re-anchors the selection after `rows` changed.
    ///
    /// A selected key that is still present stays selected. A vanished key
    /// is replaced by the row now at its last position (clamped), and an
    /// empty selection picks the first row.
    pub fn sync(&mut self, rows: &[RenderableRow]) {
        if rows.is_empty() {
            self.selected = None;
            self.offset = 0;
            return;
        }
        match self.selected_index(rows) {
            Some(index) => self.last_index = index,
            None if self.selected.is_some() => {
                let index = self.last_index.min(rows.len() - 1);
                self.select_index(rows, index);
            }
            None => self.select_first(rows),
        }
    }

    /// Current index of the selection, re-anchoring it first.
    fn resolve(&mut self, rows: &[RenderableRow]) -> Option<usize> {
        self.sync(rows);
        self.selected_index(rows)
    }
}

// ============================================================================
// Scrollbar Helper
// ============================================================================

/// Renders a vertical scrollbar on the right side of `area` when `total_items`
/// exceeds `viewport_items`.
pub fn render_list_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total_items: usize,
    viewport_items: usize,
    position: usize,
) {
    if total_items <= viewport_items {
        return;
    }

    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .track_symbol(None)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::Gray))
        .track_style(Style::default().fg(Color::DarkGray));

    let mut scrollbar_state = ScrollbarState::default()
        .content_length(total_items)
        .viewport_content_length(viewport_items)
        .position(position);

    scrollbar.render(area, buf, &mut scrollbar_state);
}

// ============================================================================
// Tests
// ============================================================================
