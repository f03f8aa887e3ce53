use super::model::{CellId, Table};
use itertools::Itertools;

/// Cells placed on a rectangular grid of tiles. A cell spanning several
/// rows or columns occupies every tile of its rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<CellId>>,
    columns: usize,
}

/// A maximal run of tiles in one row that belong to the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub id: CellId,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

impl Grid {
    /// Places every cell, in declaration order, at the first column of its
    /// row where its whole rectangle is still free. Rows are then padded
    /// to equal length with [`Table::FILLER`].
    pub fn arrange(table: &Table<'_>) -> Self {
        let mut slots: Vec<Vec<Option<CellId>>> = Vec::new();
        for (row, ids) in table.rows().iter().enumerate() {
            let mut col = 0;
            for &id in ids {
                let cell = table.cell(id);
                while !is_free(&slots, row, col, cell.row_span, cell.col_span) {
                    col += 1;
                }
                for r in row..row + cell.row_span {
                    if slots.len() <= r {
                        slots.resize_with(r + 1, Vec::new);
                    }
                    let tiles = &mut slots[r];
                    if tiles.len() < col + cell.col_span {
                        tiles.resize(col + cell.col_span, None);
                    }
                    for tile in &mut tiles[col..col + cell.col_span] {
                        *tile = Some(id);
                    }
                }
                col += cell.col_span;
            }
        }

        let columns = slots.iter().map(Vec::len).max().unwrap_or(0);
        let tiles = slots
            .into_iter()
            .map(|row| {
                let mut row: Vec<CellId> =
                    row.into_iter().map(|t| t.unwrap_or(Table::FILLER)).collect();
                row.resize(columns, Table::FILLER);
                row
            })
            .collect();
        Self { tiles, columns }
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns == 0
    }

    pub fn at(&self, row: usize, col: usize) -> CellId {
        self.tiles[row][col]
    }

    /// The row split into runs of equal cells, left to right.
    pub fn segments(&self, row: usize) -> Vec<Segment> {
        let chunks = self.tiles[row].iter().enumerate().chunk_by(|&(_, &id)| id);
        let mut segments = Vec::new();
        for (id, mut chunk) in &chunks {
            let start = chunk.next().map_or(0, |(col, _)| col);
            let end = start + 1 + chunk.count();
            segments.push(Segment { id, start, end });
        }
        segments
    }

    /// Whether the tile at `(row, col)` belongs to the same cell as the
    /// tile above it.
    pub fn continues_from_above(&self, row: usize, col: usize) -> bool {
        row > 0 && self.tiles[row - 1][col] == self.tiles[row][col]
    }

    /// Whether `segment` of `row` reappears unchanged in the next row. The
    /// filler may start at a different column in every row, so matching
    /// tiles alone do not make a continuation.
    pub fn continues_below(&self, row: usize, segment: &Segment) -> bool {
        row + 1 < self.rows() && self.segments(row + 1).contains(segment)
    }

    /// Whether the boundary after column `col` lies inside a span in
    /// `row`. `None` stands for the space outside the grid, which counts as
    /// spanned everywhere except at the right edge.
    pub fn spans_boundary(&self, row: Option<usize>, col: usize) -> bool {
        col + 1 < self.columns
            && row.is_none_or(|r| self.tiles[r][col] == self.tiles[r][col + 1])
    }
}

fn is_free(
    slots: &[Vec<Option<CellId>>],
    row: usize,
    col: usize,
    row_span: usize,
    col_span: usize,
) -> bool {
    slots
        .iter()
        .skip(row)
        .take(row_span)
        .all(|tiles| (col..col + col_span).all(|c| tiles.get(c).is_none_or(Option::is_none)))
}
