//! Markdown documentation for Capability/Process Pattern records
//!
//!     This crate turns process pattern XML records into Markdown: headings, prose with
//!     inline emphasis and links, bullet lists, aligned tables and fenced code.
//!
//!     This is a pure lib, that is, it powers procdoc-cli but is shell agnostic: no code
//!     here prints to stdout, reads env vars or exits the process. Diagnostics go through
//!     the `log` facade and the binary decides where they end up.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── markup                  # Element model, XML loading, Markdown conversion
//!     │   ├── node.rs             # MarkupNode (text / tail model)
//!     │   ├── tag.rs              # TagKind dispatch enum
//!     │   ├── parser.rs           # roxmltree -> MarkupNode
//!     │   ├── scope.rs            # Namespace-scoped find / find_all
//!     │   └── converter.rs        # Mixed content -> Markdown
//!     ├── table.rs                # Fixed-width pipe tables
//!     ├── text.rs                 # Whitespace normalization, cell flattening
//!     ├── sections                # Section trait, registry and the record sections
//!     ├── publish.rs              # Discovery and per-directory output
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     Two pieces carry the design: the mixed-content walk in ./markup/converter.rs and
//!     the table renderer in ./table.rs. Everything in ./sections only locates elements
//!     and feeds them to those two, so the sections stay simple lookups.
//!
//!     Conversion never fails. Unknown tags keep their text and drop their markup;
//!     missing elements render as empty fragments. Errors only exist at the edges:
//!     malformed XML and file I/O (see [`ConvertError`]).
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── markup/<topic>.rs
//!     ├── document/<topic>.rs
//!     └── fixtures/*.xml
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs
//!     declares the modules.

pub mod error;
pub mod markup;
pub mod publish;
pub mod sections;
pub mod table;
pub mod text;

pub use error::ConvertError;
pub use markup::{convert, convert_code_block, MarkupNode, Mode};
pub use publish::{convert_file, discover, publish_tree, PublishOptions, PublishReport};
pub use sections::{render_document, RenderOptions, SectionRegistry};
pub use table::{format_table, TableRecord};
pub use text::{normalize, to_cell_text};
