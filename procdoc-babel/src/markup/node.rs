use super::tag::{bare_tag_name, TagKind};

/// An element with mixed content.
///
/// Text is stored the way ElementTree-style models do: `text` is the run
/// before the first child, and each child carries its own `tail`, the run
/// between that child's end and the next sibling (or the parent's end).
/// Absent and empty text are equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    tag: String,
    kind: TagKind,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<MarkupNode>,
    tail: Option<String>,
}

impl MarkupNode {
    /// Create an element. `tag` may be bare, prefixed or in Clark notation.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        MarkupNode {
            kind: TagKind::of(&tag),
            tag,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
            tail: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Tag name without namespace qualifier
    pub fn local_name(&self) -> &str {
        bare_tag_name(&self.tag)
    }

    /// Namespace URI when the tag is in Clark notation
    pub fn namespace(&self) -> Option<&str> {
        self.tag
            .strip_prefix('{')
            .and_then(|rest| rest.split_once('}'))
            .map(|(ns, _)| ns)
    }

    /// Leading text, empty when absent
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Trailing text after this element inside its parent, empty when absent
    pub fn tail(&self) -> &str {
        self.tail.as_deref().unwrap_or("")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// All descendant text in document order, excluding this node's own tail.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(self.text());
        for child in &self.children {
            child.collect_text(out);
            out.push_str(child.tail());
        }
    }

    pub(crate) fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    pub(crate) fn push_attribute(&mut self, name: String, value: String) {
        self.attributes.push((name, value));
    }

    /// Append text at the current end of this element's content: the leading
    /// text while there are no children, the last child's tail afterwards.
    pub(crate) fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let slot = match self.children.last_mut() {
            Some(last) => &mut last.tail,
            None => &mut self.text,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }
}
