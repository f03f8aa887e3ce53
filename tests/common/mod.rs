#![allow(dead_code)]

use html2txt::{Html2Txt, PipelineBuilder, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A strict converter for a page of `width` columns that ignores `$COLUMNS`.
pub fn converter(width: usize) -> Result<Html2Txt, PipelineError> {
    init_logger();
    PipelineBuilder::new()
        .with_terminal_columns(None)
        .with_page_width(width)
        .build()
}

/// Wraps body markup into a complete XHTML document.
pub fn xhtml(body: &str) -> String {
    format!(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n\
         <html xmlns=\"http://www.w3.org/1999/xhtml\">\n\
         <head><title>test</title></head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    )
}

/// Converts body markup on a page of `width` columns and splits the result
/// into lines.
pub fn convert_body(body: &str, width: usize) -> Result<Vec<String>, PipelineError> {
    let text = converter(width)?.convert_str(&xhtml(body))?;
    Ok(text.lines().map(str::to_string).collect())
}
