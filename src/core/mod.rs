//! Core types: players, dice, errors.
//!
//! The board and protocol logic live elsewhere; this module holds the
//! building blocks they all share.

pub mod dice;
pub mod error;
pub mod player;

pub use dice::{Die, FairDie, SequenceDie};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerStatus};
