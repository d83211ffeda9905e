//! Scripted decision provider: canned answers, consumed in order.
//!
//! The deterministic stand-in for a human in tests and replays. Each
//! query pops the next queued answer; an exhausted queue answers `false`
//! (decline), which is the safe default for optional actions.

use std::collections::VecDeque;

use super::decision::DecisionProvider;

/// Provider replaying queued buy/sell answers.
#[derive(Clone, Debug)]
pub struct ScriptedProvider {
    name: String,
    buys: VecDeque<bool>,
    sells: VecDeque<bool>,
}

impl ScriptedProvider {
    /// A provider that declines everything.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buys: VecDeque::new(),
            sells: VecDeque::new(),
        }
    }

    /// Queue answers for upcoming `want_buy` queries.
    #[must_use]
    pub fn with_buys(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.buys.extend(answers);
        self
    }

    /// Queue answers for upcoming `want_sell` queries.
    #[must_use]
    pub fn with_sells(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.sells.extend(answers);
        self
    }
}

impl DecisionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn want_buy(&mut self, _property: &str) -> bool {
        self.buys.pop_front().unwrap_or(false)
    }

    fn want_sell(&mut self, _property: &str) -> bool {
        self.sells.pop_front().unwrap_or(false)
    }

    fn clone_boxed(&self) -> Box<dyn DecisionProvider> {
        Box::new(self.clone())
    }
}
