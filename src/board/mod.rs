//! The cyclic board and its fields.

pub mod board;
pub mod field;

pub use board::{property_at, Board, BoardBuilder, PassedPositions};
pub use field::{Field, FieldKind};
