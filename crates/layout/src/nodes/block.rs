use crate::engine::{BlockContext, Bullets, LayoutEngine};
use crate::error::HtmlError;
use crate::output::LineSink;
use html2txt_dom::Element;

/// Lays out the children of a wrapper element such as `<div>` or
/// `<blockquote>` in `ctx`, passing both bullet cursors through.
pub fn format(
    engine: &LayoutEngine<'_>,
    ctx: BlockContext,
    bullets: Bullets<'_>,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    engine.format_blocks(ctx, bullets, element.children(), sink)
}
