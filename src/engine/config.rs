//! Match configuration.

use serde::{Deserialize, Serialize};

/// Knobs fixed before a match starts.
///
/// ```
/// use board_tycoon::engine::EngineConfig;
///
/// let config = EngineConfig::default().with_starting_cash(1500);
/// assert_eq!(config.starting_cash, 1500);
/// assert_eq!(config.max_players, 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cash every player starts with.
    pub starting_cash: i64,
    /// Fewest players a match can start with.
    pub min_players: usize,
    /// Most players the roster accepts.
    pub max_players: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_cash: 1000,
            min_players: 2,
            max_players: 6,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 2, "a match needs at least two players");
        assert!(max >= min, "max_players below min_players");
        self.min_players = min;
        self.max_players = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.starting_cash, 1000);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 6);
    }

    #[test]
    #[should_panic(expected = "max_players below min_players")]
    fn test_bounds_validated() {
        let _ = EngineConfig::default().with_player_bounds(4, 3);
    }
}
