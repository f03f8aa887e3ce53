//! Bullet and number generators consumed by the first line of a text run.

use crate::nodes::list_utils::NumberingType;
use std::cell::{Cell, RefCell};

/// A stateful source of bullet labels.
///
/// Labels are drawn through a shared reference: the same cursor is handed
/// down by reference to every child of a list, and each `<li>` advances it.
#[derive(Debug)]
pub enum Bulleting {
    /// Always `""`.
    None,
    /// The same symbol on every call, e.g. `*` for `<ul>`.
    Symbol(&'static str),
    /// `<number>.` with the number advancing on every call.
    Numbered {
        numbering: NumberingType,
        next: Cell<i64>,
    },
    /// The label on the first call, `""` afterwards.
    Once(RefCell<Option<String>>),
}

impl Bulleting {
    pub fn numbered(numbering: NumberingType, start: i64) -> Self {
        Bulleting::Numbered {
            numbering,
            next: Cell::new(start),
        }
    }

    pub fn once(label: String) -> Self {
        Bulleting::Once(RefCell::new(Some(label)))
    }

    /// Produces the next label and advances the cursor.
    pub fn next_label(&self) -> String {
        match self {
            Bulleting::None => String::new(),
            Bulleting::Symbol(symbol) => (*symbol).to_string(),
            Bulleting::Numbered { numbering, next } => {
                let value = next.get();
                next.set(value.saturating_add(1));
                format!("{}.", numbering.format(value))
            }
            Bulleting::Once(label) => label.borrow_mut().take().unwrap_or_default(),
        }
    }
}
