//! The match driver: configuration, lifecycle, turn loop, protocols.

pub mod config;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod summary;

pub use config::EngineConfig;
pub use engine::{GameEngine, GamePhase};
pub use summary::PlayerSummary;
