use crate::node::{Element, Location, Node};
use roxmltree::NodeType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),
}

/// Parses a well-formed (X)HTML document and returns its document element.
///
/// Namespace prefixes are stripped from tag and attribute names, so
/// `<html xmlns="http://www.w3.org/1999/xhtml">` yields a plain `html`
/// element. Comments and processing instructions are skipped.
pub fn parse_document(text: &str) -> Result<Element, DomError> {
    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    let root = convert_element(&doc, doc.root_element());
    log::debug!("Parsed document with root element <{}>", root.tag());
    Ok(root)
}

fn convert_element(doc: &roxmltree::Document, node: roxmltree::Node) -> Element {
    let pos = doc.text_pos_at(node.range().start);
    let mut element =
        Element::new(node.tag_name().name()).with_location(Location::from((pos.row, pos.col)));
    for attr in node.attributes() {
        element.set_attr(attr.name(), attr.value());
    }
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.push_child(Node::Element(convert_element(doc, child))),
            NodeType::Text => element.push_text(child.text().unwrap_or_default()),
            _ => {}
        }
    }
    element
}
