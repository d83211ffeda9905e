//! Deterministic computer decision policies.
//!
//! Two levels, both named `Player<N>` by their 1-based join number:
//!
//! - `Dumb` buys every third purchase opportunity it is offered. The
//!   offer counter advances on every offer, bought or not.
//! - `Smartass` buys every purchase opportunity.
//!
//! Both consent to shortfall sales: `want_sell` is only asked while an
//! owed amount is uncovered, so "sell when needed" is just "sell when
//! asked".

use serde::{Deserialize, Serialize};

use super::decision::DecisionProvider;

/// Computer difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComputerLevel {
    /// Buys every third offered property.
    Dumb,
    /// Buys everything it can.
    Smartass,
}

/// A computer-driven [`DecisionProvider`].
#[derive(Clone, Debug)]
pub struct ComputerPolicy {
    name: String,
    level: ComputerLevel,
    offers_seen: u32,
}

impl ComputerPolicy {
    /// Create a policy for the player joining at 1-based position
    /// `join_number`.
    #[must_use]
    pub fn new(level: ComputerLevel, join_number: usize) -> Self {
        Self {
            name: format!("Player{join_number}"),
            level,
            offers_seen: 0,
        }
    }

    /// The configured level.
    #[must_use]
    pub fn level(&self) -> ComputerLevel {
        self.level
    }
}

impl DecisionProvider for ComputerPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn want_buy(&mut self, _property: &str) -> bool {
        match self.level {
            ComputerLevel::Dumb => {
                self.offers_seen += 1;
                self.offers_seen % 3 == 0
            }
            ComputerLevel::Smartass => true,
        }
    }

    fn want_sell(&mut self, _property: &str) -> bool {
        true
    }

    fn clone_boxed(&self) -> Box<dyn DecisionProvider> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dumb_buys_every_third_offer() {
        let mut policy = ComputerPolicy::new(ComputerLevel::Dumb, 1);
        let answers: Vec<bool> = (0..6).map(|_| policy.want_buy("Mill")).collect();
        assert_eq!(answers, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_smartass_buys_everything() {
        let mut policy = ComputerPolicy::new(ComputerLevel::Smartass, 2);
        for _ in 0..10 {
            assert!(policy.want_buy("Mill"));
        }
    }

    #[test]
    fn test_both_levels_consent_to_sell() {
        let mut dumb = ComputerPolicy::new(ComputerLevel::Dumb, 1);
        let mut smart = ComputerPolicy::new(ComputerLevel::Smartass, 2);
        assert!(dumb.want_sell("Mill"));
        assert!(smart.want_sell("Mill"));
    }

    #[test]
    fn test_naming_by_join_number() {
        let policy = ComputerPolicy::new(ComputerLevel::Dumb, 3);
        assert_eq!(policy.name(), "Player3");
    }

    #[test]
    fn test_clone_resets_nothing() {
        let mut policy = ComputerPolicy::new(ComputerLevel::Dumb, 1);
        policy.want_buy("Mill");
        policy.want_buy("Mill");

        // The clone carries the offer counter with it.
        let mut cloned = policy.clone_boxed();
        assert!(cloned.want_buy("Mill"));
    }
}
