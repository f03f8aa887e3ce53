//! Flattening of inline content into a single string.

use crate::engine::LayoutEngine;
use crate::error::{HtmlError, NodeRef, Severity};
use crate::registry::InlineFormatter;
use html2txt_dom::{Element, Node};

impl LayoutEngine<'_> {
    /// Appends the text rendering of `nodes` to `out`. Whitespace runs in
    /// text collapse to one space; `<br>` contributes a `\n`.
    pub fn render_inline<'n, I>(&self, nodes: I, out: &mut String) -> Result<(), HtmlError>
    where
        I: IntoIterator<Item = &'n Node>,
    {
        for node in nodes {
            match node {
                Node::Text(text) => collapse_whitespace(text, out),
                Node::Element(element) => match InlineFormatter::for_tag(element.tag()) {
                    Some(formatter) => self.format_inline(formatter, element, out)?,
                    None => self.report(
                        Severity::Error,
                        NodeRef::element(element),
                        format!("Unexpected element <{}> in inline context", element.tag()),
                    )?,
                },
            }
        }
        Ok(())
    }

    pub fn format_inline(
        &self,
        formatter: InlineFormatter,
        element: &Element,
        out: &mut String,
    ) -> Result<(), HtmlError> {
        match formatter {
            InlineFormatter::Content => self.render_inline(element.children(), out)?,
            InlineFormatter::Framing { prefix, suffix } => {
                out.push_str(prefix);
                self.render_inline(element.children(), out)?;
                out.push_str(suffix);
            }
            InlineFormatter::Link => self.format_link(element, out)?,
            InlineFormatter::Abbreviation => {
                self.render_inline(element.children(), out)?;
                let title = element.attr("title");
                if !title.is_empty() {
                    out.push_str(&format!(" (\"{title}\")"));
                }
            }
            InlineFormatter::LineBreak => {
                if element.has_children() {
                    self.report(
                        Severity::Warning,
                        NodeRef::element(element),
                        "\"<br>\" tag should not have content",
                    )?;
                }
                out.push('\n');
            }
            InlineFormatter::Input => format_input(element, out),
            InlineFormatter::Quotation => {
                out.push('"');
                self.render_inline(element.children(), out)?;
                out.push('"');
                let cite = element.attr("cite");
                if !cite.is_empty() {
                    out.push_str(&format!(" ({cite})"));
                }
            }
            InlineFormatter::Image => out.push_str("[IMG]"),
            InlineFormatter::NotYetImplemented => {
                self.report(
                    Severity::Warning,
                    NodeRef::element(element),
                    format!(
                        "HTML inline element <{}> is not yet implemented and thus ignored",
                        element.tag()
                    ),
                )?;
                self.render_inline(element.children(), out)?;
            }
        }
        Ok(())
    }

    fn format_link(&self, element: &Element, out: &mut String) -> Result<(), HtmlError> {
        let name = element.attr("name");
        let href = element.attr("href");
        match (name.is_empty(), href.is_empty()) {
            (false, true) => {
                let mut content = String::new();
                self.render_inline(element.children(), &mut content)?;
                if !content.trim().is_empty() {
                    self.report(
                        Severity::Warning,
                        NodeRef::element(element),
                        "Anchor \"<a name=...>\" should not have content",
                    )?;
                }
            }
            (true, false) => {
                self.render_inline(element.children(), out)?;
                out.push_str(&format!(" (see \"{href}\")"));
            }
            _ => {
                self.report(
                    Severity::Warning,
                    NodeRef::element(element),
                    "\"<a>\" tag needs exactly one of the \"name\" and \"href\" attributes",
                )?;
                self.render_inline(element.children(), out)?;
            }
        }
        Ok(())
    }
}

fn format_input(element: &Element, out: &mut String) {
    let checked = element.attribute("checked").is_some();
    let value = element.attr("value");
    match element.attr("type") {
        "checkbox" => out.push_str(if checked { "[x]" } else { "[ ]" }),
        "hidden" => {}
        "password" => out.push_str("[******]"),
        "radio" => out.push_str(if checked { "(o)" } else { "( )" }),
        "submit" => {
            let label = if value.is_empty() { "Submit" } else { value };
            out.push_str(&format!("[ {label} ]"));
        }
        "" | "text" => out.push_str(&format!("[{value}]")),
        other => out.push_str(&format!("[{}-INPUT]", other.to_uppercase())),
    }
}

/// Appends `text` with every run of ASCII whitespace replaced by one space.
pub fn collapse_whitespace(text: &str, out: &mut String) {
    let mut in_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
}
