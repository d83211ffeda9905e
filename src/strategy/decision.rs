//! The decision protocol between the engine and a player.
//!
//! The engine suspends at exactly two points to ask a player something:
//! a purchase offer for an unowned property (`want_buy`) and, under a
//! liquidity shortfall, a sell offer for each held property
//! (`want_sell`). Calls are synchronous; the single-threaded turn loop
//! waits for the answer.

/// Answers buy/sell queries for a named property.
///
/// Human-backed implementations may block on input; computer policies
/// answer immediately. `want_sell` is only ever asked while its owner is
/// short of an owed amount.
pub trait DecisionProvider {
    /// The player's display name.
    fn name(&self) -> &str;

    /// Would this player buy the named property?
    fn want_buy(&mut self, property: &str) -> bool;

    /// Would this player sell the named property to raise cash?
    fn want_sell(&mut self, property: &str) -> bool;

    /// Clone into a new equivalent provider (prototype pattern).
    fn clone_boxed(&self) -> Box<dyn DecisionProvider>;
}

impl Clone for Box<dyn DecisionProvider> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
