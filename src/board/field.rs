//! Fields: the cells of the cyclic board.
//!
//! A closed tagged variant rather than trait objects: the traversal and
//! protocol code dispatch on the kind in a single `match`, so adding a
//! kind is a compile-checked change in exactly two places.
//!
//! Field identity and position are fixed once the board is built; the
//! deposit pool is the only mutable field state.

use serde::{Deserialize, Serialize};

use crate::economy::PropertyId;

/// What a field does to players stepping on (and, for deposits, passing
/// by) it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// No effect.
    NoOp,
    /// Runs the purchase/commission protocol against the referenced
    /// property.
    Property(PropertyId),
    /// Credits a fixed amount to the lander.
    Reward(i64),
    /// Debits a fixed fee from the lander (bank keeps it).
    Punishment(i64),
    /// Players passing by pay `fee` into the pool; the lander collects
    /// the whole pool, which then resets to zero.
    Deposit {
        /// Toll charged on pass-by.
        fee: i64,
        /// Accumulated pool, paid out on step-on.
        pool: i64,
    },
}

/// A named board cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Field {
    name: String,
    kind: FieldKind,
}

impl Field {
    /// Create a field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut FieldKind {
        &mut self.kind
    }
}
