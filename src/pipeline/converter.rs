use crate::error::PipelineError;
use html2txt_dom::{Element, parse_document};
use html2txt_layout::{HtmlErrorHandler, LayoutEngine, PageConfig, PlainTextOutput};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// A configured HTML-to-text converter. Built by
/// [`PipelineBuilder`](super::PipelineBuilder); reusable for any number of
/// documents.
pub struct Html2Txt {
    page: PageConfig,
    handler: Box<dyn HtmlErrorHandler + Send + Sync>,
}

impl Html2Txt {
    pub(crate) fn new(page: PageConfig, handler: Box<dyn HtmlErrorHandler + Send + Sync>) -> Self {
        Self { page, handler }
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Lays out an already parsed document and returns its lines, without
    /// line terminators.
    pub fn convert_element(&self, root: &Element) -> Result<Vec<String>, PipelineError> {
        Ok(self.layout(root)?.into_lines())
    }

    /// Converts XHTML source text. Every output line, the last one
    /// included, ends with `\n`.
    pub fn convert_str(&self, html: &str) -> Result<String, PipelineError> {
        let root = parse_document(html)?;
        Ok(self.layout(&root)?.into_text())
    }

    /// Reads the whole document from `input` and writes the text to `output`.
    pub fn convert_stream<R: Read, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<(), PipelineError> {
        let mut html = String::new();
        input.read_to_string(&mut html)?;
        let text = self.convert_str(&html)?;
        output.write_all(text.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    /// Converts the file at `input` into the file at `output`. Nothing is
    /// written when the conversion fails.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<(), PipelineError> {
        let input = input.as_ref();
        let html = fs::read_to_string(input).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read '{}': {}", input.display(), e),
            ))
        })?;
        log::info!("Converting {}", input.display());
        let text = self.convert_str(&html)?;
        fs::write(output.as_ref(), text)?;
        Ok(())
    }

    fn layout(&self, root: &Element) -> Result<PlainTextOutput, PipelineError> {
        let engine = LayoutEngine::new(&*self.handler);
        let mut output = PlainTextOutput::new();
        engine.format_document(root, &self.page, &mut output)?;
        Ok(output)
    }
}
