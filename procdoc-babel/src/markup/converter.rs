//! Mixed content to Markdown
//!
//!     The walk is depth first. Each element contributes its leading text, then every
//!     child's converted content (shaped by the child's [`TagKind`]) followed by the
//!     child's tail text.
//!
//!     | Kind          | Output                         |
//!     |---------------|--------------------------------|
//!     | Paragraph     | `\n\n` + collapsed content     |
//!     | Emphasis      | `*content*`                    |
//!     | Bold          | `**content**`                  |
//!     | Link          | `[content](href)` or `<href>`  |
//!     | UnorderedList | `\n` + content                 |
//!     | ListItem      | `\n* ` + collapsed content     |
//!     | LineBreak     | `\n`                           |
//!     | Other         | content                        |
//!
//! Whitespace
//!
//!     Authored text is kept as written. In [`Mode::Prose`] two things change it:
//!     paragraph and list item content is collapsed to single spaces, and text that
//!     touches a block element (paragraph, list, list item, line break) is trimmed on
//!     the side facing that block, since it is only source indentation. An unknown
//!     wrapper counts as a block only when its first or last non-blank piece is one;
//!     a newline inside inline text does not make it a block. Inline
//!     elements move their own edge whitespace outside the markers so `a<em> b</em>`
//!     becomes `a *b*` instead of the non-emphasis `a* b*`.
//!
//!     [`Mode::Verbatim`] turns all of that off below the element it starts at. It is
//!     used for literal code, which is never collapsed.
//!
//! Links
//!
//!     The target is `href`, or the element's own trimmed text when `href` is absent.
//!     A label that is empty or equal to the target gives an autolink `<target>`, but
//!     only for absolute URLs: a relative target such as `docs/x` gives `[docs/x](docs/x)`
//!     because `<docs/x>` reads as an HTML tag. A link with no target at all is logged
//!     and rendered as `[label]()`.

use super::{MarkupNode, TagKind};
use crate::text::{dedent, normalize, strip_trailing_ellipsis};
use log::warn;
use url::Url;

/// How text below an element is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Prose: collapse paragraphs and list items, trim layout whitespace
    #[default]
    Prose,
    /// Literal text: every character survives
    Verbatim,
}

/// Convert an element's content to Markdown in prose mode.
///
/// The element's own tag contributes no markup; only its content is rendered.
/// Returns an empty string for `None`.
pub fn convert(node: Option<&MarkupNode>) -> String {
    convert_with_mode(node, Mode::Prose)
}

/// Convert an element's content with an explicit mode.
pub fn convert_with_mode(node: Option<&MarkupNode>, mode: Mode) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let content = render_content(node, mode);
    match mode {
        Mode::Prose => content.text.trim().to_string(),
        Mode::Verbatim => trim_verbatim(&content.text),
    }
}

/// Convert an element including its own formatting rule.
///
/// Useful when the caller holds the link (or emphasis) element itself rather
/// than its parent.
pub fn convert_element(node: Option<&MarkupNode>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let content = render_content(node, Mode::Prose);
    format_element(node, content, Mode::Prose).text.trim().to_string()
}

/// Render literal content as a fenced code block.
///
/// The content is taken verbatim, dedented, and stripped of a trailing
/// ellipsis (`...`, or any run of dots at the very end). Returns `None` when
/// nothing is left.
pub fn convert_code_block(node: Option<&MarkupNode>, language: &str) -> Option<String> {
    let raw = convert_with_mode(node, Mode::Verbatim);
    let code = strip_trailing_ellipsis(&raw);
    if code.trim().is_empty() {
        return None;
    }
    Some(format!("```{language}\n{code}\n```"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PieceKind {
    Text,
    Inline,
    Block,
}

#[derive(Debug)]
struct Piece {
    text: String,
    kind: PieceKind,
}

impl Piece {
    fn text(text: &str) -> Self {
        Piece {
            text: text.to_string(),
            kind: PieceKind::Text,
        }
    }

    fn is_block(&self) -> bool {
        self.kind == PieceKind::Block
    }

    /// Whitespace-only text is layout and never decides a boundary.
    fn is_layout(&self) -> bool {
        self.kind == PieceKind::Text && self.text.trim().is_empty()
    }
}

/// Rendered content of an element and whether it opens or closes on a block.
struct Content {
    text: String,
    opens_block: bool,
    closes_block: bool,
}

fn render_content(node: &MarkupNode, mode: Mode) -> Content {
    let mut pieces = Vec::with_capacity(node.children().len() * 2 + 1);
    if !node.text().is_empty() {
        pieces.push(Piece::text(node.text()));
    }

    for child in node.children() {
        let content = render_content(child, mode);
        pieces.push(format_element(child, content, mode));
        if !child.tail().is_empty() {
            pieces.push(Piece::text(child.tail()));
        }
    }

    let mut significant = pieces.iter().filter(|piece| !piece.is_layout());
    let opens_block = significant.next().is_some_and(Piece::is_block);
    let closes_block = significant.next_back().map_or(opens_block, Piece::is_block);

    Content {
        text: join_pieces(&pieces, mode),
        opens_block,
        closes_block,
    }
}

fn join_pieces(pieces: &[Piece], mode: Mode) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if piece.kind != PieceKind::Text || mode == Mode::Verbatim {
            out.push_str(&piece.text);
            continue;
        }

        let mut text = piece.text.as_str();
        if i > 0 && pieces[i - 1].is_block() {
            text = text.trim_start();
        }
        if pieces.get(i + 1).is_some_and(Piece::is_block) {
            text = text.trim_end();
        }
        out.push_str(text);
    }
    out
}

fn format_element(node: &MarkupNode, content: Content, mode: Mode) -> Piece {
    let block = |text: String| Piece {
        text,
        kind: PieceKind::Block,
    };
    let inline = |text: String| Piece {
        text,
        kind: PieceKind::Inline,
    };

    let Content {
        text: content,
        opens_block,
        closes_block,
    } = content;

    match node.kind() {
        TagKind::Paragraph => match mode {
            Mode::Prose => {
                let collapsed = normalize(&content);
                if collapsed.is_empty() {
                    block(String::new())
                } else {
                    block(format!("\n\n{collapsed}"))
                }
            }
            Mode::Verbatim => block(format!("\n\n{content}")),
        },
        TagKind::Emphasis => inline(wrap_inline(&content, "*")),
        TagKind::Bold => inline(wrap_inline(&content, "**")),
        TagKind::Link => inline(format_link(node, &content)),
        TagKind::UnorderedList => block(format!("\n{content}")),
        TagKind::ListItem => match mode {
            Mode::Prose => {
                let collapsed = normalize(&content);
                if collapsed.is_empty() {
                    block(String::new())
                } else {
                    block(format!("\n* {collapsed}"))
                }
            }
            Mode::Verbatim => block(format!("\n* {content}")),
        },
        TagKind::LineBreak => block("\n".to_string()),
        TagKind::Other => {
            // A wrapper that opens or closes with a block element (e.g. it
            // holds paragraphs) sits on a block boundary too.
            if opens_block || closes_block {
                block(content)
            } else {
                inline(content)
            }
        }
    }
}

/// Split content into (leading whitespace, core, trailing whitespace).
fn chomp(content: &str) -> (&str, &str, &str) {
    let core_start = content.len() - content.trim_start().len();
    let core = content.trim();
    let core_end = core_start + core.len();
    (&content[..core_start], core, &content[core_end..])
}

fn wrap_inline(content: &str, marker: &str) -> String {
    let (lead, core, trail) = chomp(content);
    if core.is_empty() {
        return content.to_string();
    }
    format!("{lead}{marker}{core}{marker}{trail}")
}

fn format_link(node: &MarkupNode, content: &str) -> String {
    let (lead, label, trail) = chomp(content);

    let target = node
        .attribute("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .or_else(|| Some(node.text().trim()).filter(|text| !text.is_empty()));

    let link = match target {
        None => {
            warn!("Link without a target: '{label}'");
            format!("[{label}]()")
        }
        Some(target) if label.is_empty() || label == target => autolink(target),
        Some(target) => format!("[{label}]({target})"),
    };
    format!("{lead}{link}{trail}")
}

/// `<target>` is only an autolink in Markdown when the target is an absolute
/// URI; anything else would read as an HTML tag.
fn autolink(target: &str) -> String {
    if Url::parse(target).is_ok() {
        format!("<{target}>")
    } else {
        format!("[{target}]({target})")
    }
}

fn trim_verbatim(content: &str) -> String {
    let trimmed = content.trim_end();
    let first_line = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .filter(|(_, c)| *c == '\n')
        .last()
        .map(|(idx, _)| idx + 1)
        .unwrap_or(0);
    dedent(&trimmed[first_line..])
}
