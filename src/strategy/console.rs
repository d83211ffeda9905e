//! Interactive human decision provider.
//!
//! Asks yes/no questions on the terminal via `dialoguer` confirm prompts.
//! The engine blocks until the prompt is answered; there is no timeout,
//! which is fine for the one-decision-at-a-time turn loop. A failed
//! prompt (closed terminal, interrupt) counts as "no", so a dying
//! terminal cannot wedge the protocol into an error path mid-turn.

use dialoguer::Confirm;

use super::decision::DecisionProvider;

/// Human player answering on the console.
#[derive(Clone, Debug)]
pub struct ConsoleProvider {
    name: String,
}

impl ConsoleProvider {
    /// A console-backed human with a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn confirm(&self, prompt: String) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

impl DecisionProvider for ConsoleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn want_buy(&mut self, property: &str) -> bool {
        self.confirm(format!("{}, buy {}?", self.name, property))
    }

    fn want_sell(&mut self, property: &str) -> bool {
        self.confirm(format!("{}, sell {} to raise cash?", self.name, property))
    }

    fn clone_boxed(&self) -> Box<dyn DecisionProvider> {
        Box::new(self.clone())
    }
}
