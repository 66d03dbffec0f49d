//! Text normalization helpers
//!
//! [`normalize`] is for flat, single-line fields (labels, names, table keys).
//! It must not be used on fragments whose line breaks carry structure: converted
//! paragraphs and lists go through [`to_cell_text`] instead when they end up
//! inside a table cell, and literal code is never touched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Line-break marker understood inside Markdown table cells
pub const CELL_LINE_BREAK: &str = "<br>";

/// Glyph used for list items flattened into a table cell
pub const CELL_BULLET: &str = "•";

static TRAILING_ELLIPSIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\.+\s*$").expect("ellipsis pattern is valid"));

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rewrite a converted Markdown fragment so it fits on a single table row.
///
/// Paragraph breaks become `<br><br>`, list items become `<br>• item`, and
/// any remaining newline becomes `<br>`. Fragments that already carry raw HTML
/// lists are returned as they are.
pub fn to_cell_text(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }
    if fragment.contains("<ul>") || fragment.contains("<li>") {
        return fragment.to_string();
    }

    let bullet = format!("{CELL_LINE_BREAK}{CELL_BULLET} ");
    let mut text = fragment.replace("\n* ", &bullet);
    if let Some(rest) = text.strip_prefix("* ") {
        text = format!("{CELL_BULLET} {rest}");
    }
    text.replace('\n', CELL_LINE_BREAK)
}

/// Remove a trailing ellipsis (one or more dots, with surrounding whitespace)
/// from the end of a block.
pub fn strip_trailing_ellipsis(text: &str) -> String {
    TRAILING_ELLIPSIS.replace(text, "").into_owned()
}

/// Remove the indentation shared by every non-blank line.
///
/// Indentation is counted in characters, so mixed-width whitespace never splits
/// a character.
pub fn dedent(text: &str) -> String {
    let indent = |line: &str| line.chars().take_while(|c| c.is_whitespace()).count();

    let lines: Vec<&str> = text.lines().collect();
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line.chars().skip(min_indent).collect()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent every non-empty line after the first by `indent`.
///
/// Used to keep multi-line fragments inside a Markdown list item.
pub fn indent_continuation(text: &str, indent: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
    out
}
