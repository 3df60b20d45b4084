//! Compiled triggers and transition matching.
//!
//! A [`CompiledTrigger`] is immutable once built. Matching walks the rules
//! in declaration order and stops at the first rule whose matcher accepts
//! the state change; predicate matchers of later rules are never invoked.

mod options;
mod rule;

pub use options::{TriggerOptions, UnresolvedLocals};
pub use rule::TransitionRule;

use crate::core::{Locals, StateRegistry};
use crate::timeline::{ElementContext, ResolveError, TransitionInstruction};
use std::sync::Arc;

/// A validated trigger: its states and its ordered transition rules.
#[derive(Clone, Debug)]
pub struct CompiledTrigger {
    name: Arc<str>,
    states: Arc<StateRegistry>,
    rules: Vec<TransitionRule>,
    options: Arc<TriggerOptions>,
}

impl CompiledTrigger {
    pub(crate) fn new(
        name: Arc<str>,
        states: Arc<StateRegistry>,
        rules: Vec<TransitionRule>,
        options: Arc<TriggerOptions>,
    ) -> Self {
        Self {
            name,
            states,
            rules,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered states and their styles.
    pub fn states(&self) -> &StateRegistry {
        &self.states
    }

    /// Transition rules in declaration order.
    pub fn transition_factories(&self) -> &[TransitionRule] {
        &self.rules
    }

    pub fn options(&self) -> &TriggerOptions {
        &self.options
    }

    /// Find the first rule accepting `from -> to`.
    ///
    /// `None` means no transition applies; it is not an error.
    pub fn match_transition(&self, from: &str, to: &str) -> Option<&TransitionRule> {
        let rule = self.rules.iter().find(|rule| rule.matches(from, to));

        match rule {
            Some(rule) => tracing::trace!(
                trigger = %self.name,
                rule = rule.index(),
                from,
                to,
                "transition matched"
            ),
            None => tracing::trace!(trigger = %self.name, from, to, "no transition matched"),
        }

        rule
    }

    /// Match and build in one call. Returns `Ok(None)` when no rule applies.
    pub fn build_transition<E>(
        &self,
        element: &E,
        from: &str,
        to: &str,
        locals: Option<&Locals>,
    ) -> Result<Option<TransitionInstruction>, ResolveError>
    where
        E: ElementContext + ?Sized,
    {
        self.match_transition(from, to)
            .map(|rule| rule.build(element, from, to, locals))
            .transpose()
    }
}
