//! Fixed-width plain-text layout of HTML document trees.
//!
//! [`LayoutEngine`] walks an [`html2txt_dom::Element`] tree and emits lines
//! into a [`LineSink`]: running text is word-wrapped into the measure,
//! lists get bullets or numbers in the margin, and tables are sized and
//! drawn with ASCII borders.

pub mod bulleting;
pub mod config;
pub mod engine;
pub mod error;
pub mod nodes;
pub mod output;
pub mod registry;
pub mod text;
pub mod util;

pub use self::bulleting::Bulleting;
pub use self::config::PageConfig;
pub use self::engine::{BlockContext, Bullets, LayoutEngine};
pub use self::error::{
    CollectingErrorHandler, HtmlError, HtmlErrorHandler, LoggingErrorHandler, NodeRef, Severity,
    StrictErrorHandler,
};
pub use self::output::{LineSink, PlainTextOutput};
pub use self::registry::{BlockFormatter, InlineFormatter};
pub use self::text::TextAlign;

#[cfg(test)]
mod markup_test;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
