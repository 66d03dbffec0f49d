//! Shared helpers for the integration tests.

use procdoc_babel::markup::parse_markup;
use procdoc_babel::MarkupNode;
use std::path::{Path, PathBuf};

pub const NS: &str = "https://eden-fidelis.eu/cpp/cpp/";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parse a fragment wrapped in a namespaced `<cpp:d>` element.
pub fn fragment(body: &str) -> MarkupNode {
    let source = format!(r#"<cpp:d xmlns:cpp="{NS}">{body}</cpp:d>"#);
    parse_markup(&source, Path::new("fragment.xml")).expect("fragment should parse")
}

/// Wrap sections in a record root and parse it.
pub fn record(body: &str) -> MarkupNode {
    let source = format!(r#"<cpp:cpp xmlns:cpp="{NS}">{body}</cpp:cpp>"#);
    parse_markup(&source, Path::new("record.xml")).expect("record should parse")
}
