use super::SizedTable;
use super::grid::Grid;
use super::model::{CellId, Table};
use crate::output::LineSink;
use crate::text::TextAlign;
use crate::util::{repeat_char, spaces, text_width};

/// Draws a sized table: a border or separator line before every row and
/// after the last one (where the table has characters for them), and the
/// cell content in between.
pub fn render(
    table: &Table<'_>,
    grid: &Grid,
    sized: &SizedTable,
    left_margin: usize,
    sink: &mut dyn LineSink,
) {
    let mut renderer = Renderer {
        table,
        grid,
        sized,
        margin: spaces(left_margin),
        cursors: vec![None; grid.columns()],
    };
    for row in 0..=grid.rows() {
        renderer.separator(row, sink);
        if row < grid.rows() {
            renderer.content(row, sink);
        }
    }
}

/// Reads the lines of one cell. It lives on while the cell spans further
/// rows, so a row-spanning cell continues where it left off.
#[derive(Debug, Clone)]
struct LineCursor {
    id: CellId,
    /// First column after the cell.
    end: usize,
    width: usize,
    next: usize,
}

impl LineCursor {
    fn next_line(&mut self, table: &Table<'_>, sized: &SizedTable) -> String {
        let lines = &sized.layouts[self.id.index()].lines;
        let line = lines.get(self.next).map_or("", String::as_str);
        self.next += 1;
        position(line, self.width, table.cell(self.id).align)
    }
}

fn position(line: &str, width: usize, align: TextAlign) -> String {
    let slack = width.saturating_sub(text_width(line));
    let before = match align {
        TextAlign::Right => slack,
        TextAlign::Center => slack / 2,
        TextAlign::Left | TextAlign::Justify => 0,
    };
    format!("{}{line}{}", spaces(before), spaces(slack - before))
}

struct Renderer<'r, 't> {
    table: &'r Table<'t>,
    grid: &'r Grid,
    sized: &'r SizedTable,
    margin: String,
    /// Open cursors, keyed by the first column of their cell.
    cursors: Vec<Option<LineCursor>>,
}

impl Renderer<'_, '_> {
    fn merged_width(&self, start: usize, end: usize) -> usize {
        let separators = (end - start - 1) * self.table.border.separator_width();
        self.sized.column_widths[start..end].iter().sum::<usize>() + separators
    }

    /// The horizontal line above grid row `row`; `row == rows` is the
    /// bottom border.
    fn separator(&mut self, row: usize, sink: &mut dyn LineSink) {
        let border = self.table.border;
        let rows = self.grid.rows();
        let fill = match row {
            0 => border.top,
            r if r == rows => border.bottom,
            _ => border.row_separator,
        };
        let Some(fill) = fill else {
            return;
        };
        let above = row.checked_sub(1);
        let below = (row < rows).then_some(row);
        let columns = self.grid.columns();

        let mut line = self.margin.clone();
        line.push_str(&repeat_char('+', border.left.chars().count()));
        let mut col = 0;
        while col < columns {
            if let Some(cursor) = self.cursors[col].as_mut() {
                // A row-spanning cell shows its next line instead of the separator.
                line.push_str(&cursor.next_line(self.table, self.sized));
                col = cursor.end;
            } else {
                let c = match above {
                    Some(r) if self.table.cell(self.grid.at(r, col)).is_header => {
                        border.heading_separator.unwrap_or(fill)
                    }
                    _ => fill,
                };
                line.push_str(&repeat_char(c, self.sized.column_widths[col]));
                col += 1;
            }

            let boundary = col - 1;
            let width = if col == columns {
                border.right.chars().count()
            } else {
                border.separator_width()
            };
            let seamless = self.grid.spans_boundary(above, boundary)
                && self.grid.spans_boundary(below, boundary);
            line.push_str(&repeat_char(if seamless { fill } else { '+' }, width));
        }
        sink.push_line(line);
    }

    fn content(&mut self, row: usize, sink: &mut dyn LineSink) {
        let border = self.table.border;
        let columns = self.grid.columns();
        let segments = self.grid.segments(row);

        for segment in &segments {
            let open = matches!(&self.cursors[segment.start], Some(c) if c.id == segment.id);
            if !open {
                let width = self.merged_width(segment.start, segment.end);
                self.cursors[segment.start] = Some(LineCursor {
                    id: segment.id,
                    end: segment.end,
                    width,
                    next: 0,
                });
            }
        }

        for _ in 0..self.sized.row_heights[row] {
            let mut line = self.margin.clone();
            line.push_str(border.left);
            for segment in &segments {
                if let Some(cursor) = self.cursors[segment.start].as_mut() {
                    line.push_str(&cursor.next_line(self.table, self.sized));
                }
                line.push_str(if segment.end == columns {
                    border.right
                } else {
                    border.column_separator
                });
            }
            sink.push_line(line);
        }

        for col in 0..columns {
            let continues = segments
                .iter()
                .any(|s| s.start == col && self.grid.continues_below(row, s));
            if !continues {
                self.cursors[col] = None;
            }
        }
    }
}
