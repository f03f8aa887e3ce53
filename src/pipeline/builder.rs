use super::config::{Html2TxtConfig, columns_from_env};
use super::converter::Html2Txt;
use crate::error::PipelineError;
use html2txt_layout::{HtmlErrorHandler, LoggingErrorHandler, PageConfig, StrictErrorHandler};
use std::path::Path;

/// A builder for creating an [`Html2Txt`] converter.
///
/// Page geometry is resolved from, lowest precedence first: the built-in
/// defaults, `$COLUMNS`, the configuration file, and the `with_*` setters.
pub struct PipelineBuilder {
    columns: Option<usize>,
    file_config: Html2TxtConfig,
    explicit: Html2TxtConfig,
    handler: Option<Box<dyn HtmlErrorHandler + Send + Sync>>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            columns: columns_from_env(),
            file_config: Html2TxtConfig::default(),
            explicit: Html2TxtConfig::default(),
            handler: None,
        }
    }
}

impl PipelineBuilder {
    /// Creates a builder seeded with `$COLUMNS`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads settings from a JSON configuration file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.file_config = Html2TxtConfig::from_file(path)?;
        Ok(self)
    }

    /// Uses an already loaded configuration in place of a file.
    pub fn with_config(mut self, config: Html2TxtConfig) -> Self {
        self.file_config = config;
        self
    }

    /// Replaces the `$COLUMNS` value read at construction; `None` ignores
    /// the environment.
    pub fn with_terminal_columns(mut self, columns: Option<usize>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_page_width(mut self, width: usize) -> Self {
        self.explicit.page_width = Some(width);
        self
    }

    pub fn with_left_margin(mut self, margin: usize) -> Self {
        self.explicit.left_margin = Some(margin);
        self
    }

    pub fn with_right_margin(mut self, margin: usize) -> Self {
        self.explicit.right_margin = Some(margin);
        self
    }

    /// Logs diagnostics and carries on, aborting only on fatal errors.
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.explicit.lenient = Some(lenient);
        self
    }

    /// Installs a custom error handler. It takes precedence over
    /// [`with_lenient`](Self::with_lenient).
    pub fn with_error_handler<H>(mut self, handler: H) -> Self
    where
        H: HtmlErrorHandler + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Consumes the builder and creates the converter.
    pub fn build(self) -> Result<Html2Txt, PipelineError> {
        let mut page = PageConfig::default();
        if let Some(columns) = self.columns {
            page.page_width = columns;
        }
        let settings = self.file_config.merged_with(&self.explicit);
        settings.apply_to(&mut page);

        if page.page_width == 0 {
            return Err(PipelineError::Config(
                "page width must be at least 1".to_string(),
            ));
        }
        if page.left_margin + page.right_margin >= page.page_width {
            log::warn!(
                "Margins {} + {} leave no room on a page of width {}; text will use a measure of 1",
                page.left_margin,
                page.right_margin,
                page.page_width
            );
        }

        let handler: Box<dyn HtmlErrorHandler + Send + Sync> = match self.handler {
            Some(handler) => handler,
            None if settings.lenient.unwrap_or(false) => {
                log::info!("Lenient mode: diagnostics are logged, not fatal.");
                Box::new(LoggingErrorHandler)
            }
            None => Box::new(StrictErrorHandler),
        };

        log::debug!(
            "Page width {}, left margin {}, right margin {}, measure {}",
            page.page_width,
            page.left_margin,
            page.right_margin,
            page.measure()
        );
        Ok(Html2Txt::new(page, handler))
    }
}
