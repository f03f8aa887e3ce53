//! Diagnostics raised while laying out a document, and the pluggable
//! handlers that decide whether a diagnostic aborts the conversion.

use html2txt_dom::{Element, Location, Node};
use std::fmt;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the node a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub description: String,
    pub location: Option<Location>,
}

impl NodeRef {
    pub fn element(element: &Element) -> Self {
        Self {
            description: element.describe(),
            location: element.location(),
        }
    }

    /// Text nodes carry no position of their own; `parent` supplies one.
    pub fn child_of(node: &Node, parent: &Element) -> Self {
        match node {
            Node::Element(element) => Self::element(element),
            Node::Text(_) => Self {
                description: node.describe(),
                location: parent.location(),
            },
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A single diagnostic. When it is returned from a handler it aborts the
/// conversion and surfaces as the error of the whole operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}{message} (at {node})", location_prefix(.node.location))]
pub struct HtmlError {
    pub severity: Severity,
    pub message: String,
    pub node: NodeRef,
}

fn location_prefix(location: Option<Location>) -> String {
    location.map(|l| format!("{l}: ")).unwrap_or_default()
}

impl HtmlError {
    pub fn new(severity: Severity, message: impl Into<String>, node: NodeRef) -> Self {
        Self {
            severity,
            message: message.into(),
            node,
        }
    }
}

/// Receives every diagnostic the layout engine produces. Returning `Err`
/// aborts the conversion; returning `Ok(())` lets it continue with the
/// offending node skipped.
pub trait HtmlErrorHandler {
    fn warning(&self, error: HtmlError) -> Result<(), HtmlError>;
    fn error(&self, error: HtmlError) -> Result<(), HtmlError>;
    fn fatal_error(&self, error: HtmlError) -> Result<(), HtmlError>;

    /// Routes a diagnostic to the method matching its severity.
    fn report(&self, error: HtmlError) -> Result<(), HtmlError> {
        match error.severity {
            Severity::Warning => self.warning(error),
            Severity::Error => self.error(error),
            Severity::Fatal => self.fatal_error(error),
        }
    }
}

/// Treats every diagnostic, even a warning, as fatal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictErrorHandler;

impl HtmlErrorHandler for StrictErrorHandler {
    fn warning(&self, error: HtmlError) -> Result<(), HtmlError> {
        Err(error)
    }

    fn error(&self, error: HtmlError) -> Result<(), HtmlError> {
        Err(error)
    }

    fn fatal_error(&self, error: HtmlError) -> Result<(), HtmlError> {
        Err(error)
    }
}

/// Logs warnings and errors and carries on. Only fatal errors abort.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingErrorHandler;

impl HtmlErrorHandler for LoggingErrorHandler {
    fn warning(&self, error: HtmlError) -> Result<(), HtmlError> {
        log::warn!("{error}");
        Ok(())
    }

    fn error(&self, error: HtmlError) -> Result<(), HtmlError> {
        log::error!("{error}");
        Ok(())
    }

    fn fatal_error(&self, error: HtmlError) -> Result<(), HtmlError> {
        Err(error)
    }
}

/// Records every diagnostic and never aborts.
#[derive(Debug, Default)]
pub struct CollectingErrorHandler {
    collected: Mutex<Vec<HtmlError>>,
}

impl CollectingErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, error: HtmlError) -> Result<(), HtmlError> {
        match self.collected.lock() {
            Ok(mut collected) => collected.push(error),
            Err(poisoned) => poisoned.into_inner().push(error),
        }
        Ok(())
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<HtmlError> {
        match self.collected.lock() {
            Ok(mut collected) => std::mem::take(&mut *collected),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl HtmlErrorHandler for CollectingErrorHandler {
    fn warning(&self, error: HtmlError) -> Result<(), HtmlError> {
        self.record(error)
    }

    fn error(&self, error: HtmlError) -> Result<(), HtmlError> {
        self.record(error)
    }

    fn fatal_error(&self, error: HtmlError) -> Result<(), HtmlError> {
        self.record(error)
    }
}
