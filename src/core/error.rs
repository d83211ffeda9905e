//! Error taxonomy for the engine surface.
//!
//! Configuration errors (`NoDie`, `TooFewPlayers`, `TooManyPlayers`,
//! `MatchOver`) are detected eagerly, at roster-mutation time or on entry
//! to [`play`](crate::engine::GameEngine::play), and leave engine state
//! unchanged. `AlreadyOwned` signals a broken ownership invariant: the
//! purchase protocol only offers unowned properties, so seeing it means a
//! programming defect, not a recoverable game situation.
//!
//! Bankruptcies and abandoned purchases are normal game outcomes, never
//! errors.

use thiserror::Error;

/// Everything the engine surface can fail with.
#[derive(Debug, Error)]
pub enum GameError {
    /// `play` was invoked before any die was set.
    #[error("no die set up to play a game")]
    NoDie,

    /// `play` was invoked with fewer players than the configured minimum.
    #[error("at least {min} players required")]
    TooFewPlayers {
        /// The configured minimum player count.
        min: usize,
    },

    /// A player was added once the configured maximum was reached.
    #[error("max number of players ({max}) exceeded")]
    TooManyPlayers {
        /// The configured maximum player count.
        max: usize,
    },

    /// The engine runs a single match; `play` and roster mutation fail
    /// once the match has started.
    #[error("match already played")]
    MatchOver,

    /// Attempted takeover of a property that already has a different owner.
    #[error("property {property:?} already has an owner")]
    AlreadyOwned {
        /// Name of the contested property.
        property: String,
    },

    /// Writing a round marker or summary to the output sink failed.
    #[error("output sink error: {0}")]
    Io(#[from] std::io::Error),
}
