use crate::error::PipelineError;
use html2txt_layout::PageConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Converter settings as read from a JSON configuration file.
///
/// Every field is optional. A field that is not set leaves the value from
/// the lower-precedence source alone, so a file that only names
/// `"left-margin"` still honors `$COLUMNS` for the page width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Html2TxtConfig {
    pub page_width: Option<usize>,
    pub left_margin: Option<usize>,
    pub right_margin: Option<usize>,
    /// Log diagnostics and continue instead of aborting on the first one.
    pub lenient: Option<bool>,
}

impl Html2TxtConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read configuration from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&json)
    }

    /// Layers `other` over `self`: fields set in `other` win.
    pub fn merged_with(self, other: &Self) -> Self {
        Self {
            page_width: other.page_width.or(self.page_width),
            left_margin: other.left_margin.or(self.left_margin),
            right_margin: other.right_margin.or(self.right_margin),
            lenient: other.lenient.or(self.lenient),
        }
    }

    /// Overwrites the fields of `page` that this configuration sets.
    pub fn apply_to(&self, page: &mut PageConfig) {
        if let Some(width) = self.page_width {
            page.page_width = width;
        }
        if let Some(margin) = self.left_margin {
            page.left_margin = margin;
        }
        if let Some(margin) = self.right_margin {
            page.right_margin = margin;
        }
    }
}

/// The terminal width from `$COLUMNS`, if it holds a positive integer.
pub fn columns_from_env() -> Option<usize> {
    parse_columns(std::env::var("COLUMNS").ok().as_deref())
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&columns| columns > 0)
}
