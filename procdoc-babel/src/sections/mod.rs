//! Document assembly
//!
//!     A process pattern record is rendered as a fixed sequence of sections. Each
//!     section is a [`Section`] implementation that looks up its own elements, calls
//!     the markup converter and table formatter, and returns a finished Markdown
//!     block (or nothing, when the record has no such content).
//!
//!     The [`SectionRegistry`] owns the order. The default registry renders:
//!
//!     | Section          | Source elements                                   |
//!     |------------------|---------------------------------------------------|
//!     | title            | header/label                                      |
//!     | short-definition | shortDefinition                                   |
//!     | description      | descriptionAndScope                               |
//!     | authors          | header/authors/author                             |
//!     | contributors     | header/contributors/contributor                   |
//!     | evaluators       | header/evaluators/evaluator                       |
//!     | process          | process/inputs, process/outputs, triggerEvents    |
//!     | steps            | every step below process                          |
//!     | rationale        | rationaleWorstCase/purpose                        |
//!     | relationships    | cppRelationships/relationship                     |
//!     | mappings         | frameworkMappings/mapping                         |
//!     | references       | referenceImplementations                          |
//!
//!     Sections never fail. Missing elements simply yield no block.

mod header;
mod mappings;
mod process;
mod references;
mod tables;

use crate::error::ConvertError;
use crate::markup::{convert, simple_text, MarkupNode, Scope};
use serde::{Deserialize, Serialize};

pub use header::{DescriptionSection, PeopleSection, ShortDefinitionSection, TitleSection};
pub use mappings::MappingsSection;
pub use process::{ProcessSection, StepsSection};
pub use references::ReferencesSection;
pub use tables::{RationaleSection, RelationshipsSection};

/// Namespace of the Capability/Process Pattern schema
pub const DEFAULT_NAMESPACE: &str = "https://eden-fidelis.eu/cpp/cpp/";

/// Knobs for rendering a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Namespace the record's elements live in
    pub namespace: String,

    /// Title used when the record has no label
    pub missing_label: String,

    /// Info string of fenced solution code blocks
    pub solution_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            missing_label: "No Label Found".to_string(),
            solution_language: "python".to_string(),
        }
    }
}

/// A record being rendered, with lookup helpers bound to its namespace.
pub struct Record<'a> {
    root: &'a MarkupNode,
    scope: Scope<'a>,
    options: &'a RenderOptions,
}

impl<'a> Record<'a> {
    pub fn new(root: &'a MarkupNode, options: &'a RenderOptions) -> Self {
        Record {
            root,
            scope: Scope::new(&options.namespace),
            options,
        }
    }

    pub fn root(&self) -> &'a MarkupNode {
        self.root
    }

    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    pub fn scope(&self) -> Scope<'a> {
        self.scope
    }

    /// First element at `path` below the root
    pub fn find(&self, path: &str) -> Option<&'a MarkupNode> {
        self.scope.find(Some(self.root), path)
    }

    /// First element at `path` below `node`
    pub fn find_in(&self, node: Option<&'a MarkupNode>, path: &str) -> Option<&'a MarkupNode> {
        self.scope.find(node, path)
    }

    pub fn find_all_in(&self, node: Option<&'a MarkupNode>, path: &str) -> Vec<&'a MarkupNode> {
        self.scope.find_all(node, path)
    }

    /// Element at `path` below the root, only when it has child elements.
    ///
    /// Container sections (process, rationale, ...) are skipped when their
    /// element is present but empty.
    pub fn container(&self, path: &str) -> Option<&'a MarkupNode> {
        self.find(path).filter(|node| node.has_children())
    }

    /// Collapsed plain text at `path` below `node`
    pub fn text_in(&self, node: Option<&'a MarkupNode>, path: &str) -> String {
        simple_text(self.find_in(node, path))
    }

    /// Converted Markdown at `path` below `node`
    pub fn markup_in(&self, node: Option<&'a MarkupNode>, path: &str) -> String {
        convert(self.find_in(node, path))
    }
}

/// One block of the rendered document.
pub trait Section: Send + Sync {
    /// Stable identifier (e.g. "steps")
    fn name(&self) -> &str;

    /// Render the block, including its heading and trailing blank line.
    ///
    /// Returns `None` when the record has nothing for this section.
    fn render(&self, record: &Record<'_>) -> Option<String>;
}

/// Ordered set of sections making up a document
pub struct SectionRegistry {
    sections: Vec<Box<dyn Section>>,
}

impl SectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        SectionRegistry {
            sections: Vec::new(),
        }
    }

    /// Append a section. A section with the same name is replaced in place.
    pub fn register<S: Section + 'static>(&mut self, section: S) {
        match self.sections.iter().position(|s| s.name() == section.name()) {
            Some(index) => self.sections[index] = Box::new(section),
            None => self.sections.push(Box::new(section)),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name() == name)
    }

    /// Section names in render order
    pub fn names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name()).collect()
    }

    /// Registry with every section of a process pattern record
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TitleSection);
        registry.register(ShortDefinitionSection);
        registry.register(DescriptionSection);
        registry.register(PeopleSection::authors());
        registry.register(PeopleSection::contributors());
        registry.register(PeopleSection::evaluators());
        registry.register(ProcessSection);
        registry.register(StepsSection);
        registry.register(RationaleSection);
        registry.register(RelationshipsSection);
        registry.register(MappingsSection);
        registry.register(ReferencesSection);
        registry
    }

    /// Render every section in order and concatenate the blocks.
    pub fn render(&self, root: &MarkupNode, options: &RenderOptions) -> String {
        let record = Record::new(root, options);
        let mut markdown = String::new();
        for section in &self.sections {
            if let Some(block) = section.render(&record) {
                log::debug!("Rendered section '{}'", section.name());
                markdown.push_str(&block);
            }
        }
        markdown
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Render a record with the default sections.
///
/// Fails only when the root element lies outside the configured namespace,
/// which means the file is not a process pattern record at all.
pub fn render_document(root: &MarkupNode, options: &RenderOptions) -> Result<String, ConvertError> {
    if root.namespace().unwrap_or("") != options.namespace {
        return Err(ConvertError::ForeignRoot {
            tag: root.tag().to_string(),
            namespace: options.namespace.clone(),
        });
    }
    Ok(SectionRegistry::with_defaults().render(root, options))
}

/// `- item` lines followed by a blank line, under a heading line.
pub(crate) fn bullet_block(heading: &str, items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut block = format!("{heading}\n");
    for item in items {
        block.push_str(&format!("- {item}\n"));
    }
    block.push('\n');
    Some(block)
}
