use serde::{Deserialize, Serialize};

/// Geometry of the output page, in character columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageConfig {
    /// The total number of columns of the output page.
    ///
    /// Defaults to `80`. The command line and the pipeline builder seed it
    /// from `$COLUMNS` when that is set.
    pub page_width: usize,

    /// Columns left blank at the start of every line. Defaults to `0`.
    pub left_margin: usize,

    /// Columns kept free at the end of every line. Defaults to `1`, so that
    /// a full-width line does not trigger an automatic wrap on terminals.
    pub right_margin: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: 80,
            left_margin: 0,
            right_margin: 1,
        }
    }
}

impl PageConfig {
    /// The number of columns available for text, never less than one.
    pub fn measure(&self) -> usize {
        self.page_width
            .saturating_sub(self.left_margin)
            .saturating_sub(self.right_margin)
            .max(1)
    }
}
