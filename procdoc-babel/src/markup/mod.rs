//! Mixed-content markup: the element model, its XML loader, namespace
//! lookups and the Markdown converter.

pub mod converter;
mod node;
mod parser;
mod scope;
mod tag;

pub use converter::{convert, convert_code_block, convert_element, convert_with_mode, Mode};
pub use node::MarkupNode;
pub use parser::{load_markup, parse_markup};
pub use scope::{simple_text, Scope};
pub use tag::{bare_tag_name, TagKind};
