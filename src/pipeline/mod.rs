//! The conversion pipeline: configuration layering, the builder, and the
//! [`Html2Txt`] converter that parses, lays out and writes documents.
//!
//! # Example
//!
//! ```ignore
//! use html2txt::PipelineBuilder;
//!
//! let converter = PipelineBuilder::new()
//!     .with_config_file("html2txt.json")?
//!     .with_lenient(true)
//!     .build()?;
//!
//! converter.convert_file("page.html", "page.txt")?;
//! ```

mod builder;
pub mod config;
mod converter;

pub use builder::PipelineBuilder;
pub use config::Html2TxtConfig;
pub use converter::Html2Txt;
