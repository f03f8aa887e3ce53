use crate::engine::LayoutEngine;
use crate::error::{HtmlError, NodeRef, Severity};
use crate::text::TextAlign;
use html2txt_dom::{Element, Node};

/// Spans beyond this are clamped.
const MAX_SPAN: usize = 1000;

/// Index of a [`Cell`] in its table's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One `<td>` or `<th>`.
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    pub is_header: bool,
    pub row_span: usize,
    pub col_span: usize,
    /// Position of the cell's lines inside its merged width.
    pub align: TextAlign,
    pub content: &'a [Node],
}

impl<'a> Cell<'a> {
    fn filler() -> Self {
        Self {
            is_header: false,
            row_span: 1,
            col_span: 1,
            align: TextAlign::Left,
            content: &[],
        }
    }

    fn parse(element: &'a Element) -> Self {
        Self {
            is_header: element.tag() == "th",
            row_span: parse_span(element.attribute("rowspan")),
            col_span: parse_span(element.attribute("colspan")),
            align: element
                .attribute("align")
                .and_then(TextAlign::from_attribute)
                .unwrap_or_default(),
            content: element.children(),
        }
    }
}

fn parse_span(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

/// The characters a table is drawn with. `None` means the table has no
/// line at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub top: Option<char>,
    pub row_separator: Option<char>,
    pub heading_separator: Option<char>,
    pub bottom: Option<char>,
    pub left: &'static str,
    pub column_separator: &'static str,
    pub right: &'static str,
}

impl BorderStyle {
    pub const NONE: Self = Self {
        top: None,
        row_separator: None,
        heading_separator: None,
        bottom: None,
        left: "",
        column_separator: " ",
        right: "",
    };

    pub const SINGLE: Self = Self {
        top: Some('-'),
        row_separator: Some('-'),
        heading_separator: Some('='),
        bottom: Some('-'),
        left: "|",
        column_separator: "|",
        right: "|",
    };

    pub const DOUBLE: Self = Self {
        top: Some('='),
        row_separator: Some('='),
        heading_separator: Some('='),
        bottom: Some('='),
        left: "||",
        column_separator: "||",
        right: "||",
    };

    /// Maps the `border` attribute of `<table>`.
    pub fn from_attribute(value: &str) -> Self {
        match value.trim() {
            "1" => Self::SINGLE,
            "2" => Self::DOUBLE,
            _ => Self::NONE,
        }
    }

    pub fn separator_width(&self) -> usize {
        self.column_separator.chars().count()
    }

    /// Total width of a table with the given column widths.
    pub fn table_width(&self, column_widths: &[usize]) -> usize {
        let separators = column_widths.len().saturating_sub(1) * self.separator_width();
        self.left.chars().count()
            + self.right.chars().count()
            + separators
            + column_widths.iter().sum::<usize>()
    }
}

/// A parsed `<table>`: its cells in an arena and, per `<tr>`, the ids of
/// the cells declared in it.
#[derive(Debug)]
pub struct Table<'a> {
    pub border: BorderStyle,
    pub stretch_to_full_width: bool,
    cells: Vec<Cell<'a>>,
    rows: Vec<Vec<CellId>>,
}

impl<'a> Table<'a> {
    /// The empty cell that pads short rows. Shared by every padded tile.
    pub const FILLER: CellId = CellId(0);

    /// Reads the table model from a `<table>` element. Unexpected children
    /// are reported as warnings and skipped.
    pub fn parse(engine: &LayoutEngine<'_>, element: &'a Element) -> Result<Self, HtmlError> {
        let mut table = Self {
            border: BorderStyle::from_attribute(element.attr("border")),
            stretch_to_full_width: element.attr("width").trim() == "100%",
            cells: vec![Cell::filler()],
            rows: Vec::new(),
        };
        table.parse_rows(engine, element, true)?;
        Ok(table)
    }

    fn parse_rows(
        &mut self,
        engine: &LayoutEngine<'_>,
        container: &'a Element,
        allow_groups: bool,
    ) -> Result<(), HtmlError> {
        for child in container.children() {
            match child {
                Node::Element(tr) if tr.tag() == "tr" => self.parse_row(engine, tr)?,
                Node::Element(group)
                    if allow_groups && matches!(group.tag(), "thead" | "tbody" | "tfoot") =>
                {
                    self.parse_rows(engine, group, false)?
                }
                node if node.is_whitespace() => {}
                other => engine.report(
                    Severity::Warning,
                    NodeRef::child_of(other, container),
                    format!("Unexpected {} in <{}>, expected <tr>", other.describe(), container.tag()),
                )?,
            }
        }
        Ok(())
    }

    fn parse_row(&mut self, engine: &LayoutEngine<'_>, tr: &'a Element) -> Result<(), HtmlError> {
        let mut row = Vec::new();
        for child in tr.children() {
            match child {
                Node::Element(cell) if matches!(cell.tag(), "td" | "th") => {
                    row.push(CellId(self.cells.len()));
                    self.cells.push(Cell::parse(cell));
                }
                node if node.is_whitespace() => {}
                other => engine.report(
                    Severity::Warning,
                    NodeRef::child_of(other, tr),
                    format!("Unexpected {} in <tr>, expected <td> or <th>", other.describe()),
                )?,
            }
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn cell(&self, id: CellId) -> &Cell<'a> {
        &self.cells[id.0]
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell ids per `<tr>`, in declaration order.
    pub fn rows(&self) -> &[Vec<CellId>] {
        &self.rows
    }
}
