//! Fixed-width Markdown tables
//!
//! Every column is padded to the widest line it holds, so the table lines up in a
//! plain-text viewer as well as rendering in any pipe-table Markdown dialect.
//!
//! Cells may hold several visual lines joined with [`CELL_LINE_BREAK`]. Width is
//! measured per line: a cell `a<br>bb` needs two columns, not seven. A raw newline
//! in a cell would end the row, so it is rewritten to [`CELL_LINE_BREAK`] first.

use crate::text::CELL_LINE_BREAK;
use serde::Deserialize;
use std::collections::HashMap;

/// One table row, keyed by column name.
///
/// Columns missing from a record render as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TableRecord {
    cells: HashMap<String, String>,
}

impl TableRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for TableRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TableRecord {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Render records as an aligned pipe table.
///
/// Columns appear in `headers` order whatever the records contain. Returns an
/// empty string when there are no records: a table without rows is suppressed,
/// not rendered as a lone header.
pub fn format_table<H: AsRef<str>>(headers: &[H], records: &[TableRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| cell_text(record.get(header.as_ref()).unwrap_or("")))
                .collect()
        })
        .collect();

    let widths = column_widths(headers, &rows);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers.iter().map(|header| header.as_ref()), &widths));
    lines.push(render_separator(&widths));
    for row in &rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn column_widths<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|header| longest_line(header.as_ref()))
        .collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(longest_line(cell));
        }
    }
    widths
}

/// Length in characters of the longest visual line of a cell.
fn longest_line(cell: &str) -> usize {
    cell.split(CELL_LINE_BREAK)
        .flat_map(|segment| segment.split('\n'))
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Left-aligned delimiter row. Always at least one dash, or the row would not
/// be a valid delimiter.
fn render_separator(widths: &[usize]) -> String {
    let columns: Vec<String> = widths
        .iter()
        .map(|&width| format!(":{}", "-".repeat(width.saturating_sub(1).max(1))))
        .collect();
    format!("| {} |", columns.join(" | "))
}

/// Keep a cell on its row: newlines become line breaks and pipes are escaped.
fn cell_text(cell: &str) -> String {
    let joined = cell.replace("\r\n", "\n").replace('\n', CELL_LINE_BREAK);
    escape_pipes(&joined)
}

/// Escape `|` so cell content cannot split the row.
fn escape_pipes(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    let mut previous = None;
    for c in cell.chars() {
        if c == '|' && previous != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        previous = Some(c);
    }
    out
}
