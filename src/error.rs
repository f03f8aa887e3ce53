use html2txt_dom::DomError;
use html2txt_layout::HtmlError;
use thiserror::Error;

/// Everything that can make a conversion fail.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Parsing failed: {0}")]
    Dom(#[from] DomError),

    #[error("{0}")]
    Html(#[from] HtmlError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Configuration file is not valid: {0}")]
    Json(#[from] serde_json::Error),
}
