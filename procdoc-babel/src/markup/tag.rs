//! Tag classification
//!
//! Tag names are mapped to [`TagKind`] once, when a [`MarkupNode`](super::MarkupNode)
//! is built. The converter then dispatches on the enum and never looks at raw
//! tag strings again.

/// The formatting rule that applies to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `p`
    Paragraph,
    /// `em`
    Emphasis,
    /// `b`
    Bold,
    /// `a` or `hyperlink`
    Link,
    /// `ul`
    UnorderedList,
    /// `li`
    ListItem,
    /// `br`
    LineBreak,
    /// Anything else. Contributes its text content and no markup.
    Other,
}

impl TagKind {
    /// Classify a tag, qualified (`{ns}p`, `x:p`) or bare (`p`).
    pub fn of(tag: &str) -> Self {
        Self::from_bare_name(bare_tag_name(tag))
    }

    pub fn from_bare_name(name: &str) -> Self {
        match name {
            "p" => TagKind::Paragraph,
            "em" => TagKind::Emphasis,
            "b" => TagKind::Bold,
            "a" | "hyperlink" => TagKind::Link,
            "ul" => TagKind::UnorderedList,
            "li" => TagKind::ListItem,
            "br" => TagKind::LineBreak,
            _ => TagKind::Other,
        }
    }

    /// Block kinds own the line breaks around them, so whitespace touching
    /// them is layout rather than content.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            TagKind::Paragraph | TagKind::UnorderedList | TagKind::ListItem | TagKind::LineBreak
        )
    }
}

/// Strip a namespace qualifier from a tag name.
///
/// Everything up to and including the last `}` (Clark notation) or `:`
/// (prefixed names) is dropped.
pub fn bare_tag_name(tag: &str) -> &str {
    tag.rsplit(['}', ':']).next().unwrap_or(tag)
}
