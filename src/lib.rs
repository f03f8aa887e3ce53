//! Converts (X)HTML documents into fixed-width plain text.
//!
//! ```ignore
//! use html2txt::PipelineBuilder;
//!
//! let converter = PipelineBuilder::new().with_page_width(72).build()?;
//! let text = converter.convert_str("<html><body><p>Hello</p></body></html>")?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Html2Txt, Html2TxtConfig, PipelineBuilder};

pub use html2txt_dom::{Element, Location, Node};
pub use html2txt_layout::{
    CollectingErrorHandler, HtmlError, HtmlErrorHandler, LoggingErrorHandler, PageConfig,
    Severity, StrictErrorHandler,
};
