//! End-of-match per-player summaries.
//!
//! The `Display` form is the console contract line; tests compare it
//! byte-for-byte.

use serde::{Deserialize, Serialize};

/// One player's final standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Display name.
    pub name: String,
    /// Final cash.
    pub cash: i64,
    /// Whether the player ended the match bankrupt.
    pub bankrupt: bool,
    /// Names of owned properties, in holding order.
    pub properties: Vec<String>,
}

impl std::fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.bankrupt {
            write!(f, " (bankrupt)")?;
        }
        write!(f, ": cash {}, properties [{}]", self.cash, self.properties.join(", "))
    }
}
