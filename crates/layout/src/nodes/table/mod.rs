//! `<table>` layout: parse into an arena of cells, arrange the cells on a
//! grid, resolve column widths in up to two trial passes, then draw.

pub mod grid;
pub mod model;
pub mod render;

pub use grid::{Grid, Segment};
pub use model::{BorderStyle, Cell, CellId, Table};

use crate::bulleting::Bulleting;
use crate::engine::{BlockContext, Bullets, LayoutEngine};
use crate::error::HtmlError;
use crate::nodes::table_solver::{CellLayout, SpanRequirements};
use crate::output::LineSink;
use crate::util::{UNBOUNDED, spread_evenly};
use html2txt_dom::Element;
use std::collections::HashMap;
use std::rc::Rc;

/// Formats `element` as a table into `ctx.measure` columns.
pub fn format(
    engine: &LayoutEngine<'_>,
    ctx: BlockContext,
    element: &Element,
    sink: &mut dyn LineSink,
) -> Result<(), HtmlError> {
    let table = Table::parse(engine, element)?;
    let grid = Grid::arrange(&table);
    if grid.is_empty() {
        log::debug!("Skipping table without cells");
        return Ok(());
    }
    let mut formatter = TableFormatter::new(engine, &table, &grid);
    let sized = formatter.size(ctx.measure)?;
    render::render(&table, &grid, &sized, ctx.left_margin, sink);
    Ok(())
}

/// The layouts of all cells for one set of column measures, indexed by
/// [`CellId::index`].
pub type CellLayouts = Vec<Rc<CellLayout>>;

/// The outcome of width resolution: what [`render::render`] draws.
#[derive(Debug, Clone)]
pub struct SizedTable {
    pub column_widths: Vec<usize>,
    pub row_heights: Vec<usize>,
    pub layouts: CellLayouts,
}

/// Sizes one table. Cell layouts are memoized by cell and measure for the
/// lifetime of the formatter.
pub struct TableFormatter<'e, 'h, 't> {
    engine: &'e LayoutEngine<'h>,
    table: &'t Table<'t>,
    grid: &'t Grid,
    cache: HashMap<(CellId, usize), Rc<CellLayout>>,
}

impl<'e, 'h, 't> TableFormatter<'e, 'h, 't> {
    pub fn new(engine: &'e LayoutEngine<'h>, table: &'t Table<'t>, grid: &'t Grid) -> Self {
        Self {
            engine,
            table,
            grid,
            cache: HashMap::new(),
        }
    }

    /// Chooses column widths for `measure` and lays out every cell at them.
    pub fn size(&mut self, measure: usize) -> Result<SizedTable, HtmlError> {
        let border = self.table.border;
        let columns = self.grid.columns();

        let min_layouts = self.format_cells(&vec![1; columns])?;
        let min_widths = self.column_widths(&min_layouts);
        let min_table_width = border.table_width(&min_widths);

        let (column_widths, layouts) = if measure <= min_table_width {
            log::debug!(
                "Table needs {min_table_width} columns at least, measure is {measure}; using minimum widths"
            );
            (min_widths, min_layouts)
        } else {
            let natural_layouts = self.format_cells(&vec![UNBOUNDED; columns])?;
            let natural_widths = self.column_widths(&natural_layouts);
            let natural_table_width = border.table_width(&natural_widths);
            log::debug!(
                "Table width: minimum {min_table_width}, natural {natural_table_width}, measure {measure}"
            );

            if natural_table_width <= measure {
                if self.table.stretch_to_full_width && measure != UNBOUNDED {
                    let mut widths = natural_widths;
                    spread_evenly(measure - natural_table_width, &mut widths);
                    let layouts = self.format_cells(&widths)?;
                    (widths, layouts)
                } else {
                    (natural_widths, natural_layouts)
                }
            } else {
                let mut widths = min_widths;
                spread_evenly(measure - min_table_width, &mut widths);
                let layouts = self.format_cells(&widths)?;
                (widths, layouts)
            }
        };

        let row_heights = self.row_heights(&layouts);
        Ok(SizedTable {
            column_widths,
            row_heights,
            layouts,
        })
    }

    /// Lays out every cell at the given column measures. A spanning cell
    /// gets the measures of its columns plus the separators between them.
    pub fn format_cells(&mut self, column_measures: &[usize]) -> Result<CellLayouts, HtmlError> {
        let separator = self.table.border.separator_width();
        let mut layouts = vec![Rc::new(CellLayout::default()); self.table.cell_count()];
        for row in 0..self.grid.rows() {
            for segment in self.grid.segments(row) {
                if self.grid.continues_from_above(row, segment.start) {
                    continue;
                }
                let measure = column_measures[segment.start..segment.end]
                    .iter()
                    .fold(separator.saturating_mul(segment.span() - 1), |acc, &m| {
                        acc.saturating_add(m)
                    });
                layouts[segment.id.index()] = self.layout_cell(segment.id, measure)?;
            }
        }
        Ok(layouts)
    }

    fn layout_cell(&mut self, id: CellId, measure: usize) -> Result<Rc<CellLayout>, HtmlError> {
        if let Some(layout) = self.cache.get(&(id, measure)) {
            return Ok(Rc::clone(layout));
        }
        log::trace!("Laying out cell {} at measure {measure}", id.index());
        let none = Bulleting::None;
        let mut lines = Vec::new();
        self.engine.format_blocks(
            BlockContext::new(0, measure),
            Bullets::both(&none),
            self.table.cell(id).content,
            &mut lines,
        )?;
        let layout = Rc::new(CellLayout::new(lines));
        self.cache.insert((id, measure), Rc::clone(&layout));
        Ok(layout)
    }

    /// Column widths that fit every cell layout, spans included.
    pub fn column_widths(&self, layouts: &CellLayouts) -> Vec<usize> {
        let mut requirements = SpanRequirements::new();
        for row in 0..self.grid.rows() {
            for segment in self.grid.segments(row) {
                requirements.require(
                    segment.start,
                    segment.span(),
                    layouts[segment.id.index()].width,
                );
            }
        }
        requirements.resolve(self.grid.columns())
    }

    /// Row heights that fit every cell layout. A row-spanning cell is
    /// counted once, at its first row.
    pub fn row_heights(&self, layouts: &CellLayouts) -> Vec<usize> {
        let mut requirements = SpanRequirements::new();
        for row in 0..self.grid.rows() {
            for segment in self.grid.segments(row) {
                if self.grid.continues_from_above(row, segment.start) {
                    continue;
                }
                let span = (row..self.grid.rows())
                    .take_while(|&r| self.grid.at(r, segment.start) == segment.id)
                    .count();
                requirements.require(row, span, layouts[segment.id.index()].height);
            }
        }
        requirements.resolve(self.grid.rows())
    }
}
