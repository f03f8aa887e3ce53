use crate::config::PageConfig;
use crate::engine::LayoutEngine;
use crate::error::{CollectingErrorHandler, HtmlError, HtmlErrorHandler, StrictErrorHandler};
use crate::output::PlainTextOutput;
use html2txt_dom::{Element, Node};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A page of the given width with no left margin and the default right margin.
pub fn page(width: usize) -> PageConfig {
    PageConfig {
        page_width: width,
        ..Default::default()
    }
}

/// Lays out `root` with the strict handler and returns the final lines.
pub fn render_with(root: &Element, page: &PageConfig) -> Result<Vec<String>, HtmlError> {
    render_with_handler(root, page, &StrictErrorHandler)
}

pub fn render_with_handler(
    root: &Element,
    page: &PageConfig,
    handler: &dyn HtmlErrorHandler,
) -> Result<Vec<String>, HtmlError> {
    init_logger();
    let engine = LayoutEngine::new(handler);
    let mut output = PlainTextOutput::new();
    engine.format_document(root, page, &mut output)?;
    Ok(output.into_lines())
}

/// Renders `children` inside `<html><body>` on an 80-column page.
pub fn render_body(children: Vec<Node>) -> Vec<String> {
    let doc = html(children);
    render_with(&doc, &page(80)).unwrap()
}

/// Renders with a collecting handler and returns the lines plus the
/// messages of all diagnostics.
pub fn render_collecting(root: &Element, page: &PageConfig) -> (Vec<String>, Vec<String>) {
    let handler = CollectingErrorHandler::new();
    let lines = render_with_handler(root, page, &handler).unwrap();
    let messages = handler.take().into_iter().map(|e| e.message).collect();
    (lines, messages)
}

// --- Tree builders ---

pub fn html(body_children: Vec<Node>) -> Element {
    Element::new("html").with_child(Element::new("body").with_children(body_children))
}

pub fn el(tag: &str, children: Vec<Node>) -> Node {
    Element::new(tag).with_children(children).into()
}

pub fn el_attrs(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    let mut element = Element::new(tag);
    for (name, value) in attrs {
        element = element.with_attr(*name, *value);
    }
    element.with_children(children).into()
}

pub fn text(content: &str) -> Node {
    Node::text(content)
}

/// `<td>` cells from plain strings.
pub fn row(cells: &[&str]) -> Node {
    el(
        "tr",
        cells.iter().map(|c| el("td", vec![text(c)])).collect(),
    )
}

pub const ONE_THRU_TWENTYFIVE: &str = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen
      fifteen sixteen seventeen eighteen nineteen twenty twenty-one twenty-two twenty-three
      twenty-four twenty-five";
