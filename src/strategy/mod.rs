//! Decision strategies: the buy/sell negotiation side of a player.
//!
//! - [`DecisionProvider`]: the query contract the engine consumes.
//! - [`ComputerPolicy`]: the two deterministic computer levels.
//! - [`ConsoleProvider`]: interactive human on the terminal.
//! - [`ScriptedProvider`]: canned answers for tests and replays.

pub mod computer;
pub mod console;
pub mod decision;
pub mod scripted;

pub use computer::{ComputerLevel, ComputerPolicy};
pub use console::ConsoleProvider;
pub use decision::DecisionProvider;
pub use scripted::ScriptedProvider;
