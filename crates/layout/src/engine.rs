use crate::bulleting::Bulleting;
use crate::config::PageConfig;
use crate::error::{HtmlError, HtmlErrorHandler, NodeRef, Severity};
use crate::nodes;
use crate::output::LineSink;
use crate::registry::{BlockFormatter, InlineFormatter};
use crate::text::TextAlign;
use crate::text::wrapper::{align_line, break_lines};
use crate::util::{UNBOUNDED, spaces, text_width};
use html2txt_dom::{Element, Node};

/// The horizontal frame a block is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockContext {
    pub left_margin: usize,
    pub measure: usize,
    pub align: TextAlign,
}

impl BlockContext {
    pub fn new(left_margin: usize, measure: usize) -> Self {
        Self {
            left_margin,
            measure,
            align: TextAlign::Left,
        }
    }

    /// Moves the left edge right by `by` columns, narrowing the measure.
    /// An unbounded measure stays unbounded.
    pub fn indented(self, by: usize) -> Self {
        let measure = if self.measure == UNBOUNDED {
            UNBOUNDED
        } else {
            self.measure.saturating_sub(by)
        };
        Self {
            left_margin: self.left_margin + by,
            measure,
            ..self
        }
    }

    pub fn with_align(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }
}

/// The two bullet cursors threaded through block formatting: `inline`
/// labels the first line of a text run, `block` is drawn from by `<li>`.
#[derive(Debug, Clone, Copy)]
pub struct Bullets<'b> {
    pub inline: &'b Bulleting,
    pub block: &'b Bulleting,
}

impl<'b> Bullets<'b> {
    pub fn new(inline: &'b Bulleting, block: &'b Bulleting) -> Self {
        Self { inline, block }
    }

    pub fn both(bulleting: &'b Bulleting) -> Self {
        Self::new(bulleting, bulleting)
    }
}

/// Lays out a document tree as fixed-width text lines.
///
/// The engine itself is stateless; all per-document state lives on the
/// stack of the formatting calls. Diagnostics are passed to the handler,
/// and an `Err` from the handler aborts the layout.
pub struct LayoutEngine<'h> {
    handler: &'h dyn HtmlErrorHandler,
}

impl<'h> LayoutEngine<'h> {
    pub fn new(handler: &'h dyn HtmlErrorHandler) -> Self {
        Self { handler }
    }

    /// Formats a whole document. For an `<html>` root every `<body>` child
    /// is laid out; any other root is laid out as a single block.
    pub fn format_document(
        &self,
        root: &Element,
        page: &PageConfig,
        sink: &mut dyn LineSink,
    ) -> Result<(), HtmlError> {
        let none = Bulleting::None;
        let bullets = Bullets::both(&none);
        let ctx = BlockContext::new(page.left_margin, page.measure());
        log::debug!(
            "Formatting <{}> document: left margin {}, measure {}",
            root.tag(),
            ctx.left_margin,
            ctx.measure
        );

        if root.tag() != "html" {
            return self.format_block(ctx, bullets, root, sink);
        }
        for body in root
            .children()
            .iter()
            .filter_map(Node::as_element)
            .filter(|e| e.tag() == "body")
        {
            self.format_blocks(ctx, bullets, body.children(), sink)?;
        }
        Ok(())
    }

    /// Formats a sequence of sibling nodes. Maximal runs of text and inline
    /// elements are flattened and word-wrapped; block elements in between
    /// are dispatched to their formatter.
    pub fn format_blocks(
        &self,
        ctx: BlockContext,
        bullets: Bullets<'_>,
        nodes: &[Node],
        sink: &mut dyn LineSink,
    ) -> Result<(), HtmlError> {
        let mut run: Vec<&Node> = Vec::new();
        for node in nodes {
            match node {
                Node::Element(element) if InlineFormatter::for_tag(element.tag()).is_none() => {
                    self.flush_run(ctx, bullets.inline, &mut run, sink)?;
                    self.format_block(ctx, bullets, element, sink)?;
                }
                _ => run.push(node),
            }
        }
        self.flush_run(ctx, bullets.inline, &mut run, sink)
    }

    fn flush_run(
        &self,
        ctx: BlockContext,
        bulleting: &Bulleting,
        run: &mut Vec<&Node>,
        sink: &mut dyn LineSink,
    ) -> Result<(), HtmlError> {
        if run.is_empty() {
            return Ok(());
        }
        let mut text = String::new();
        self.render_inline(run.drain(..), &mut text)?;
        self.word_wrap(ctx, bulleting, &text, sink);
        Ok(())
    }

    /// Formats one block element, honoring its `align` attribute.
    pub fn format_block(
        &self,
        ctx: BlockContext,
        bullets: Bullets<'_>,
        element: &Element,
        sink: &mut dyn LineSink,
    ) -> Result<(), HtmlError> {
        let ctx = match element.attribute("align").and_then(TextAlign::from_attribute) {
            Some(align) => ctx.with_align(align),
            None => ctx,
        };
        let formatter =
            BlockFormatter::for_tag(element.tag()).unwrap_or(BlockFormatter::NotYetImplemented);
        nodes::format_block(self, formatter, ctx, bullets, element, sink)
    }

    /// Wraps flattened text into the measure and emits it. The first line
    /// carries the next label of `bulleting`; empty text emits nothing and
    /// leaves the bulleting untouched.
    pub fn word_wrap(
        &self,
        ctx: BlockContext,
        bulleting: &Bulleting,
        text: &str,
        sink: &mut dyn LineSink,
    ) {
        let lines = break_lines(text, ctx.measure);
        if lines.is_empty() {
            return;
        }
        let first_margin = bullet_margin(ctx.left_margin, &bulleting.next_label());
        let margin = spaces(ctx.left_margin);
        for (i, line) in lines.into_iter().enumerate() {
            let prefix = if i == 0 { &first_margin } else { &margin };
            let aligned = align_line(&line.text, ctx.measure, ctx.align, line.ends_segment);
            sink.push_line(format!("{prefix}{aligned}"));
        }
    }

    pub(crate) fn report(
        &self,
        severity: Severity,
        node: NodeRef,
        message: impl Into<String>,
    ) -> Result<(), HtmlError> {
        self.handler.report(HtmlError::new(severity, message, node))
    }
}

/// The margin of a bulleted first line: the label right-justified into
/// `left_margin` and followed by a space, or the label and a space as is
/// when the margin is too narrow for it.
pub fn bullet_margin(left_margin: usize, label: &str) -> String {
    if label.is_empty() {
        return spaces(left_margin);
    }
    let width = text_width(label);
    if width + 1 < left_margin {
        format!("{}{label} ", spaces(left_margin - width - 1))
    } else {
        format!("{label} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_is_right_justified_into_the_margin() {
        assert_eq!(bullet_margin(3, "*"), " * ");
        assert_eq!(bullet_margin(5, "1."), "  1. ");
        assert_eq!(bullet_margin(2, "*"), "* ");
        assert_eq!(bullet_margin(0, "iii."), "iii. ");
        assert_eq!(bullet_margin(4, ""), "    ");
    }

    #[test]
    fn indenting_never_underflows() {
        let ctx = BlockContext::new(0, 3).indented(5);
        assert_eq!(ctx.left_margin, 5);
        assert_eq!(ctx.measure, 0);

        let unbounded = BlockContext::new(0, UNBOUNDED).indented(5);
        assert_eq!(unbounded.measure, UNBOUNDED);
    }
}
