//! Column widths and row heights from the sizes of (possibly spanning) cells.

use crate::util::{spread_evenly, text_width};
use std::collections::BTreeMap;

/// The wrapped content of one cell at one trial measure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellLayout {
    pub lines: Vec<String>,
    pub width: usize,
    pub height: usize,
}

impl CellLayout {
    pub fn new(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
        let height = lines.len();
        Self {
            lines,
            width,
            height,
        }
    }
}

/// Size observations along one axis of a table. Each observation says that
/// `span` consecutive tracks starting at `start` must be at least `size`
/// long in total.
#[derive(Debug, Clone, Default)]
pub struct SpanRequirements {
    /// `(span, start) -> size`, so that iteration visits narrow spans first.
    required: BTreeMap<(usize, usize), usize>,
}

impl SpanRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, start: usize, span: usize, size: usize) {
        let entry = self.required.entry((span.max(1), start)).or_insert(0);
        *entry = (*entry).max(size);
    }

    /// Computes `count` track sizes that satisfy every observation.
    ///
    /// Single-track observations are applied first. A wider span that is
    /// still short afterwards has its shortfall spread evenly over the
    /// tracks it covers.
    pub fn resolve(&self, count: usize) -> Vec<usize> {
        let mut sizes = vec![0; count];
        for (&(span, start), &size) in &self.required {
            let end = (start + span).min(count);
            if start >= end {
                continue;
            }
            let tracks = &mut sizes[start..end];
            let current: usize = tracks.iter().sum();
            if current < size {
                spread_evenly(size - current, tracks);
            }
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_spans_take_the_maximum() {
        let mut req = SpanRequirements::new();
        req.require(0, 1, 4);
        req.require(0, 1, 2);
        req.require(1, 1, 5);
        assert_eq!(req.resolve(2), vec![4, 5]);
    }

    #[test]
    fn wide_spans_spread_their_shortfall() {
        let mut req = SpanRequirements::new();
        req.require(0, 2, 12);
        req.require(0, 1, 3);
        req.require(1, 1, 3);
        // 3 + 3 is 6 short of 12; both columns grow by 3.
        assert_eq!(req.resolve(2), vec![6, 6]);

        let mut req = SpanRequirements::new();
        req.require(0, 2, 5);
        req.require(0, 1, 4);
        req.require(1, 1, 1);
        assert_eq!(req.resolve(2), vec![4, 1]);
    }

    #[test]
    fn cell_layout_measures_chars() {
        let layout = CellLayout::new(vec!["fünf".into(), "ab".into()]);
        assert_eq!((layout.width, layout.height), (4, 2));
        assert_eq!(CellLayout::new(Vec::new()), CellLayout::default());
    }
}
