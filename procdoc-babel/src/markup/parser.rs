use super::MarkupNode;
use crate::error::ConvertError;
use roxmltree::{ExpandedName, Node, NodeType};
use std::fs;
use std::path::Path;

/// Read and parse an XML file into a [`MarkupNode`] tree rooted at the
/// document element.
pub fn load_markup(path: &Path) -> Result<MarkupNode, ConvertError> {
    let source = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    parse_markup(&source, path)
}

/// Parse XML source. `origin` is only used to label errors.
pub fn parse_markup(source: &str, origin: &Path) -> Result<MarkupNode, ConvertError> {
    let doc = roxmltree::Document::parse(source).map_err(|e| ConvertError::Xml {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(build_node(doc.root_element()))
}

fn build_node(node: Node) -> MarkupNode {
    let mut element = MarkupNode::new(clark_name(node.tag_name()));

    // Attributes are keyed by local name so `href` and `xlink:href` both resolve.
    for attribute in node.attributes() {
        element.push_attribute(attribute.name().to_string(), attribute.value().to_string());
    }

    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.push_child(build_node(child)),
            // Comments and processing instructions vanish; text on either
            // side of them joins up through append_text.
            NodeType::Text => element.append_text(child.text().unwrap_or("")),
            _ => {}
        }
    }

    element
}

fn clark_name(name: ExpandedName) -> String {
    match name.namespace() {
        Some(ns) => format!("{{{ns}}}{}", name.name()),
        None => name.name().to_string(),
    }
}
