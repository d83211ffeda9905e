//! Players: identity, the cash ledger, holdings and bankruptcy.
//!
//! ## PlayerId
//!
//! Type-safe join-order index. The first player added is `PlayerId(0)`;
//! display numbering is 1-based to match the `Player<N>` naming scheme.
//!
//! ## Player
//!
//! Cash (`i64`), board position, an ordered list of owned property ids,
//! the decision strategy answering buy/sell queries, and an
//! Active/Bankrupt status. The player list is authoritative for
//! ownership: a property's owner field is only a lookup key back into it.

use serde::{Deserialize, Serialize};

use crate::economy::PropertyId;
use crate::strategy::DecisionProvider;

/// Player identifier: the 0-based join-order index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based join number, as used in computer player names.
    #[must_use]
    pub const fn join_number(self) -> usize {
        self.0 as usize + 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.join_number())
    }
}

/// Solvency status. Bankrupt is terminal: no further turns, no holdings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Taking turns.
    Active,
    /// Out of the match; all properties released.
    Bankrupt,
}

/// One seat at the table.
pub struct Player {
    id: PlayerId,
    name: String,
    cash: i64,
    position: usize,
    status: PlayerStatus,
    holdings: Vec<PropertyId>,
    decider: Box<dyn DecisionProvider>,
}

impl Player {
    /// Seat a player with the given starting cash at position 0.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        cash: i64,
        decider: Box<dyn DecisionProvider>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cash,
            position: 0,
            status: PlayerStatus::Active,
            holdings: Vec::new(),
            decider,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to a new board position. The board computes it, the player
    /// only stores it.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Still taking turns?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Credit the ledger.
    pub fn earn(&mut self, amount: i64) {
        debug_assert!(amount >= 0, "earn takes a non-negative amount");
        self.cash += amount;
    }

    /// Debit the ledger in full. Callers must have checked solvency;
    /// partial settlement goes through [`Player::pay_up_to`].
    pub fn pay(&mut self, amount: i64) {
        debug_assert!(amount >= 0, "pay takes a non-negative amount");
        debug_assert!(self.cash >= amount, "pay requires covered funds");
        self.cash -= amount;
    }

    /// Debit as much of `amount` as cash covers, clamping at zero.
    /// Returns what was actually paid.
    pub fn pay_up_to(&mut self, amount: i64) -> i64 {
        let paid = amount.min(self.cash).max(0);
        self.cash -= paid;
        paid
    }

    /// Owned property ids, in holding (acquisition) order.
    #[must_use]
    pub fn holdings(&self) -> &[PropertyId] {
        &self.holdings
    }

    /// Record a newly acquired property.
    pub fn acquire(&mut self, property: PropertyId) {
        debug_assert!(!self.holdings.contains(&property), "property already held");
        self.holdings.push(property);
    }

    /// Remove one property from the holdings (a sale). Returns whether it
    /// was actually held.
    pub fn drop_holding(&mut self, property: PropertyId) -> bool {
        match self.holdings.iter().position(|&p| p == property) {
            Some(at) => {
                self.holdings.remove(at);
                true
            }
            None => false,
        }
    }

    /// One-way transition to Bankrupt. Drains and returns the holdings so
    /// the caller can release them in the registry; cash stays at its
    /// final value.
    pub fn go_bankrupt(&mut self) -> Vec<PropertyId> {
        self.status = PlayerStatus::Bankrupt;
        std::mem::take(&mut self.holdings)
    }

    /// The decision strategy, for buy/sell queries.
    pub fn decider_mut(&mut self) -> &mut dyn DecisionProvider {
        self.decider.as_mut()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("cash", &self.cash)
            .field("position", &self.position)
            .field("status", &self.status)
            .field("holdings", &self.holdings)
            .finish_non_exhaustive()
    }
}
