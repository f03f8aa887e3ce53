use crate::engine::BlockContext;
use crate::output::LineSink;
use crate::util::{UNBOUNDED, repeat_char, spaces};

/// `<hr>`: a line of dashes across the measure. Under an unbounded
/// measure the rule is empty, so it does not widen a table column.
pub fn format(ctx: BlockContext, sink: &mut dyn LineSink) {
    let width = if ctx.measure == UNBOUNDED { 0 } else { ctx.measure };
    sink.push_line(format!("{}{}", spaces(ctx.left_margin), repeat_char('-', width)));
}
