//! Row rendering: display rows to host-facing row descriptors.
//!
//! [`render`] is a one-to-one mapping. It never filters or reorders, so the
//! n-th [`RenderableRow`] always describes the n-th [`DisplayRow`].

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Cell, Row},
};

use crate::domain::{DisplayRow, RowKey};
use crate::format::AmountFormat;
use crate::theme::{CHAIN_COLOR, CURRENCY_COLOR, USD_COLOR};

/// Column titles, in cell order.
pub const HEADERS: [&str; 4] = ["Currency", "Chain", "Amount", "USD Value"];

/// Columns whose content is right-aligned.
const RIGHT_ALIGNED: [bool; 4] = [false, false, true, true];

// ============================================================================
// RenderableRow
// ============================================================================

/// A row ready to hand to a rendering host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableRow {
    /// Identity of the row, stable across re-sorts.
    pub key: RowKey,
    /// Currency, chain, formatted amount and formatted USD value.
    pub cells: [String; 4],
}

impl RenderableRow {
    /// Converts into a ratatui table row.
    #[must_use]
    pub fn to_table_row(&self) -> Row<'static> {
        let [currency, chain, amount, usd] = &self.cells;
        Row::new(vec![
            Cell::from(currency.clone()).style(
                Style::default()
                    .fg(CURRENCY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(chain.clone()).style(Style::default().fg(CHAIN_COLOR)),
            Cell::from(Text::from(Line::from(amount.clone()).right_aligned())),
            Cell::from(Text::from(Line::from(usd.clone()).right_aligned()))
                .style(Style::default().fg(USD_COLOR)),
        ])
    }

    /// Formats as one line of plain text, padding every cell to `widths`.
    #[must_use]
    pub fn to_plain_line(&self, widths: &[usize; 4]) -> String {
        plain_line(self.cells.iter().map(String::as_str), widths)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Maps display rows to renderable rows, preserving order.
#[must_use]
pub fn render(rows: &[DisplayRow], format: &AmountFormat) -> Vec<RenderableRow> {
    rows.iter()
        .map(|row| RenderableRow {
            key: row.key.clone(),
            cells: [
                row.currency.clone(),
                row.chain.to_string(),
                row.formatted_amount.clone(),
                format.format_usd(row.usd_value),
            ],
        })
        .collect()
}

/// Widest content per column, headers included.
#[must_use]
pub fn column_widths(rows: &[RenderableRow]) -> [usize; 4] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Formats the header line for a plain-text table.
#[must_use]
pub fn plain_header(widths: &[usize; 4]) -> String {
    plain_line(HEADERS.into_iter(), widths)
}

/// Renders rows as a plain-text table, one line per row after the header.
#[must_use]
pub fn plain_table(rows: &[RenderableRow]) -> String {
    let widths = column_widths(rows);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(plain_header(&widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| row.to_plain_line(&widths)));
    lines.join("\n")
}

fn plain_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 4]) -> String {
    cells
        .zip(widths)
        .zip(RIGHT_ALIGNED)
        .map(|((cell, &width), right)| {
            if right {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
