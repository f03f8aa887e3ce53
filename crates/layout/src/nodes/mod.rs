//! Block formatters, one module per family of elements.

pub mod block;
pub mod heading;
pub mod list;
pub mod list_utils;
pub mod preformatted;
pub mod rule;
pub mod table;
pub mod table_solver;

use crate::engine::{BlockContext, Bullets, LayoutEngine};
use crate::error::{HtmlError, NodeRef, Severity};
use crate::output::LineSink;
use crate::registry::BlockFormatter;
use html2txt_dom::Element;

/// Runs `formatter` on `element`.
pub(crate) fn format_block(
    engine: &LayoutEngine<'_>,
    formatter: BlockFormatter,
    ctx: BlockContext,
    bullets: Bullets<'_>,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    match formatter {
        BlockFormatter::Transparent => block::format(engine, ctx, bullets, element, sink),
        BlockFormatter::Indent(by) => block::format(engine, ctx.indented(by), bullets, element, sink),
        BlockFormatter::UnorderedList => list::format_unordered(engine, ctx, element, sink),
        BlockFormatter::OrderedList => list::format_ordered(engine, ctx, element, sink),
        BlockFormatter::ListItem => list::format_item(engine, ctx, bullets, element, sink),
        BlockFormatter::Table => table::format(engine, ctx, element, sink),
        BlockFormatter::Heading(style) => heading::format(engine, style, ctx, element, sink),
        BlockFormatter::Preformatted => {
            preformatted::format(engine, ctx, bullets, element, sink)
        }
        BlockFormatter::HorizontalRule => {
            rule::format(ctx, sink);
            Ok(())
        }
        BlockFormatter::Suppress => Ok(()),
        BlockFormatter::NotYetImplemented => {
            engine.report(
                Severity::Warning,
                NodeRef::element(element),
                format!(
                    "HTML block element <{}> is not yet implemented and thus ignored",
                    element.tag()
                ),
            )?;
            block::format(engine, ctx, bullets, element, sink)
        }
    }
}
