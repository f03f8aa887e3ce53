use crate::bulleting::Bulleting;
use crate::engine::{BlockContext, Bullets, LayoutEngine};
use crate::error::HtmlError;
use crate::nodes::list_utils::NumberingType;
use crate::output::LineSink;
use html2txt_dom::Element;

const UNORDERED_INDENT: usize = 3;
const ORDERED_INDENT: usize = 5;

/// `<ul>`: the items draw `*` from a fresh block cursor. Text directly
/// inside the list is not bulleted.
pub fn format_unordered(
    engine: &LayoutEngine<'_>,
    ctx: BlockContext,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    let none = Bulleting::None;
    let marker = Bulleting::Symbol("*");
    engine.format_blocks(
        ctx.indented(UNORDERED_INDENT),
        Bullets::new(&none, &marker),
        element.children(),
        sink,
    )
}

/// `<ol type="..." start="...">`: like `<ul>`, but items are numbered.
pub fn format_ordered(
    engine: &LayoutEngine<'_>,
    ctx: BlockContext,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    let numbering = NumberingType::from_type_attribute(element.attr("type"));
    let start = element
        .attribute("start")
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1);
    let none = Bulleting::None;
    let counter = Bulleting::numbered(numbering, start);
    engine.format_blocks(
        ctx.indented(ORDERED_INDENT),
        Bullets::new(&none, &counter),
        element.children(),
        sink,
    )
}

/// `<li>`: takes one label from the enclosing list and puts it on the
/// first line the item produces, whichever cursor that line draws from.
pub fn format_item(
    engine: &LayoutEngine<'_>,
    ctx: BlockContext,
    bullets: Bullets<'_>,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    let label = Bulleting::once(bullets.block.next_label());
    engine.format_blocks(ctx, Bullets::both(&label), element.children(), sink)
}
