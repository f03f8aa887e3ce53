//! Document Object Model
//! The owned, read-only element tree that the text layout engine walks.
//! Trees are built either by [`parse_document`] from well-formed XHTML or
//! directly through the builder methods on [`Element`].

mod node;
mod parser;

pub use node::{Element, Location, Node};
pub use parser::{DomError, parse_document};
