//! # board-tycoon
//!
//! A turn-based board economy game engine: players move around a cyclic
//! board of named fields, acquire properties, pay commissions and fees,
//! collect rewards, and may go bankrupt. A match runs for a bounded
//! number of rounds or until fewer than two players remain solvent.
//!
//! ## Design Principles
//!
//! 1. **Closed hierarchies**: fields and properties are tagged variants,
//!    dispatched in a single `match` in the engine, not trait objects.
//! 2. **Ids over references**: ownership points player → property; the
//!    property carries only a `PlayerId` lookup key back. No cycles.
//! 3. **Pure geometry**: the board computes destinations and pass-by
//!    sequences; all effects are applied by the engine, so the traversal
//!    laws are testable in isolation.
//! 4. **One shared die**: the engine owns the single randomness source;
//!    dice and decision providers are cloneable prototypes for callers
//!    that want independent instances.
//!
//! ## Modules
//!
//! - `core`: players, dice, errors
//! - `board`: fields and cyclic traversal geometry
//! - `economy`: properties, commissions, ownership registry
//! - `strategy`: decision providers (computer levels, console human,
//!   scripted)
//! - `engine`: configuration, lifecycle, the round/turn loop and money
//!   protocols
//!
//! ## Example
//!
//! ```
//! use board_tycoon::board::BoardBuilder;
//! use board_tycoon::core::FairDie;
//! use board_tycoon::engine::GameEngine;
//! use board_tycoon::strategy::ComputerLevel;
//!
//! let (board, registry) = BoardBuilder::new()
//!     .reward("Start", 50)
//!     .real_estate("Mill", 200, 25)
//!     .punishment("Swamp", 100)
//!     .public_property("Aquarium", 300, 15)
//!     .deposit("Well", 15)
//!     .build();
//!
//! let mut engine = GameEngine::new(board, registry).with_output(Vec::new());
//! engine.set_die(Some(Box::new(FairDie::new(42))));
//! engine.add_computer_player(ComputerLevel::Dumb)?;
//! engine.add_computer_player(ComputerLevel::Smartass)?;
//! engine.play(30)?;
//! # Ok::<(), board_tycoon::core::GameError>(())
//! ```

pub mod board;
pub mod core;
pub mod economy;
pub mod engine;
pub mod strategy;

// Re-export commonly used types
pub use crate::board::{Board, BoardBuilder, Field, FieldKind};
pub use crate::core::{Die, FairDie, GameError, Player, PlayerId, PlayerStatus, SequenceDie};
pub use crate::economy::{Property, PropertyId, PropertyKind, PropertyRegistry};
pub use crate::engine::{EngineConfig, GameEngine, GamePhase, PlayerSummary};
pub use crate::strategy::{
    ComputerLevel, ComputerPolicy, ConsoleProvider, DecisionProvider, ScriptedProvider,
};
