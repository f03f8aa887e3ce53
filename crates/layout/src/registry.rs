//! The tag tables that decide how each HTML element is formatted.
//!
//! An element is inline-compatible when [`InlineFormatter::for_tag`] knows
//! it; everything else is treated as a block element.

/// How a block-level element is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormatter {
    /// Lays out the children in place, as if the element were absent.
    Transparent,
    /// Indents the children by the given number of columns.
    Indent(usize),
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    Heading(HeadingStyle),
    Preformatted,
    HorizontalRule,
    /// Produces no output at all.
    Suppress,
    /// Warns, then behaves like [`BlockFormatter::Transparent`].
    NotYetImplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingStyle {
    /// Blank line, text, underline of this character, blank line.
    Underlined(char),
    /// `marker text marker` on a single line.
    Framed(&'static str),
}

impl BlockFormatter {
    pub fn for_tag(tag: &str) -> Option<Self> {
        let formatter = match tag {
            "article" | "aside" | "canvas" | "div" | "dt" | "fieldset" | "figcaption" | "figure"
            | "footer" | "form" | "header" | "hgroup" | "main" | "nav" | "output" | "p"
            | "section" | "tbody" | "tfoot" | "thead" => BlockFormatter::Transparent,
            "address" | "blockquote" | "dl" => BlockFormatter::Indent(2),
            "dd" => BlockFormatter::Indent(4),
            "ul" => BlockFormatter::UnorderedList,
            "ol" => BlockFormatter::OrderedList,
            "li" => BlockFormatter::ListItem,
            "table" => BlockFormatter::Table,
            "h1" => BlockFormatter::Heading(HeadingStyle::Underlined('*')),
            "h2" => BlockFormatter::Heading(HeadingStyle::Underlined('=')),
            "h3" => BlockFormatter::Heading(HeadingStyle::Underlined('-')),
            "h4" => BlockFormatter::Heading(HeadingStyle::Framed("===")),
            "h5" => BlockFormatter::Heading(HeadingStyle::Framed("==")),
            "h6" => BlockFormatter::Heading(HeadingStyle::Framed("=")),
            "pre" => BlockFormatter::Preformatted,
            "hr" => BlockFormatter::HorizontalRule,
            "noscript" | "head" | "style" | "title" => BlockFormatter::Suppress,
            "audio" | "video" => BlockFormatter::NotYetImplemented,
            _ => return None,
        };
        Some(formatter)
    }

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockFormatter::Transparent => "Transparent",
            BlockFormatter::Indent(_) => "Indent",
            BlockFormatter::UnorderedList => "UnorderedList",
            BlockFormatter::OrderedList => "OrderedList",
            BlockFormatter::ListItem => "ListItem",
            BlockFormatter::Table => "Table",
            BlockFormatter::Heading(_) => "Heading",
            BlockFormatter::Preformatted => "Preformatted",
            BlockFormatter::HorizontalRule => "HorizontalRule",
            BlockFormatter::Suppress => "Suppress",
            BlockFormatter::NotYetImplemented => "NotYetImplemented",
        }
    }
}

/// How an inline element contributes to the flattened text of its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineFormatter {
    /// The element's content, undecorated.
    Content,
    Framing {
        prefix: &'static str,
        suffix: &'static str,
    },
    Link,
    Abbreviation,
    LineBreak,
    Input,
    Quotation,
    Image,
    /// Warns, then behaves like [`InlineFormatter::Content`].
    NotYetImplemented,
}

impl InlineFormatter {
    pub fn for_tag(tag: &str) -> Option<Self> {
        let formatter = match tag {
            "big" | "cite" | "code" | "dfn" | "label" | "samp" | "small" | "span" | "sub"
            | "tt" | "font" => InlineFormatter::Content,
            "b" | "strong" => InlineFormatter::framing("*", "*"),
            "em" | "i" | "var" => InlineFormatter::framing("<", ">"),
            "u" => InlineFormatter::framing("_", "_"),
            "sup" => InlineFormatter::framing("^", ""),
            "button" | "kbd" | "select" | "textarea" => InlineFormatter::framing("[ ", " ]"),
            "a" => InlineFormatter::Link,
            "abbr" | "acronym" => InlineFormatter::Abbreviation,
            "br" => InlineFormatter::LineBreak,
            "input" => InlineFormatter::Input,
            "q" => InlineFormatter::Quotation,
            "img" => InlineFormatter::Image,
            "bdo" | "map" | "object" | "script" => InlineFormatter::NotYetImplemented,
            _ => return None,
        };
        Some(formatter)
    }

    const fn framing(prefix: &'static str, suffix: &'static str) -> Self {
        InlineFormatter::Framing { prefix, suffix }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InlineFormatter::Content => "Content",
            InlineFormatter::Framing { .. } => "Framing",
            InlineFormatter::Link => "Link",
            InlineFormatter::Abbreviation => "Abbreviation",
            InlineFormatter::LineBreak => "LineBreak",
            InlineFormatter::Input => "Input",
            InlineFormatter::Quotation => "Quotation",
            InlineFormatter::Image => "Image",
            InlineFormatter::NotYetImplemented => "NotYetImplemented",
        }
    }
}
