use crate::engine::{BlockContext, LayoutEngine};
use crate::error::HtmlError;
use crate::output::LineSink;
use crate::registry::HeadingStyle;
use crate::util::{repeat_char, spaces, text_width};
use html2txt_dom::Element;
use itertools::Itertools;

pub fn format(
    engine: &LayoutEngine<'_>,
    style: HeadingStyle,
    ctx: BlockContext,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    let mut raw = String::new();
    engine.render_inline(element.children(), &mut raw)?;
    // Headings stay on one line, even across <br>.
    let text = raw.split_whitespace().join(" ");
    if text.is_empty() {
        return Ok(());
    }

    let margin = spaces(ctx.left_margin);
    match style {
        HeadingStyle::Underlined(c) => {
            sink.push_line(String::new());
            sink.push_line(format!("{margin}{text}"));
            sink.push_line(format!("{margin}{}", repeat_char(c, text_width(&text))));
            sink.push_line(String::new());
        }
        HeadingStyle::Framed(marker) => {
            sink.push_line(format!("{margin}{marker} {text} {marker}"));
        }
    }
    Ok(())
}
