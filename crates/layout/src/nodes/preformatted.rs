use crate::engine::{BlockContext, Bullets, LayoutEngine, bullet_margin};
use crate::error::{HtmlError, NodeRef, Severity};
use crate::output::LineSink;
use crate::registry::InlineFormatter;
use crate::util::spaces;
use html2txt_dom::{Element, Node};

/// `<pre>`: the text keeps its line structure and spacing. Inline markup
/// is still rendered, and a line break right after the start tag is
/// ignored.
pub fn format(
    engine: &LayoutEngine<'_>,
    ctx: BlockContext,
    bullets: Bullets<'_>,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    let mut text = String::new();
    for child in element.children() {
        match child {
            Node::Text(raw) => text.push_str(raw),
            Node::Element(inner) => match InlineFormatter::for_tag(inner.tag()) {
                Some(formatter) => engine.format_inline(formatter, inner, &mut text)?,
                None => engine.report(
                    Severity::Error,
                    NodeRef::element(inner),
                    format!("Unexpected element <{}> in <pre>", inner.tag()),
                )?,
            },
        }
    }

    let mut lines = text.lines();
    let mut first = lines.next();
    if first == Some("") {
        first = lines.next();
    }
    let Some(first) = first else {
        return Ok(());
    };
    let label = bullets.inline.next_label();
    sink.push_line(format!("{}{first}", bullet_margin(ctx.left_margin, &label)));
    let margin = spaces(ctx.left_margin);
    for line in lines {
        sink.push_line(format!("{margin}{line}"));
    }
    Ok(())
}
