//! A compiled transition rule: matcher, steps and default locals.

use crate::core::{Locals, LocalsScope, Matcher, StateRegistry, Style};
use crate::timeline::{
    CompiledStep, ElementContext, ResolveError, Resolver, TimelineBuilder, TransitionInstruction,
};
use crate::trigger::options::TriggerOptions;
use std::sync::Arc;

/// One entry of a compiled trigger's ordered rule list.
#[derive(Clone, Debug)]
pub struct TransitionRule {
    pub(crate) index: usize,
    pub(crate) trigger: Arc<str>,
    pub(crate) matcher: Matcher,
    pub(crate) steps: Vec<CompiledStep>,
    pub(crate) locals: Locals,
    pub(crate) states: Arc<StateRegistry>,
    pub(crate) options: Arc<TriggerOptions>,
}

impl TransitionRule {
    /// Position of this rule in declaration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Matcher compiled from the transition expression.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn steps(&self) -> &[CompiledStep] {
        &self.steps
    }

    /// Default locals declared with the transition.
    pub fn locals(&self) -> &Locals {
        &self.locals
    }

    /// Check whether this rule applies to `from -> to`.
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.matcher.evaluate(from, to)
    }

    /// Build the instruction for `from -> to`.
    ///
    /// Variable tokens are looked up in `locals` first, then in the rule's
    /// defaults. `element` is only read.
    pub fn build<E>(
        &self,
        element: &E,
        from: &str,
        to: &str,
        locals: Option<&Locals>,
    ) -> Result<TransitionInstruction, ResolveError>
    where
        E: ElementContext + ?Sized,
    {
        let resolver = Resolver::new(
            LocalsScope::new(&self.locals, locals),
            self.options.unresolved_locals,
        );

        let from_style = self.state_style(&resolver, from)?;
        let to_style = self.state_style(&resolver, to)?;

        let timelines = TimelineBuilder::new(element, resolver)
            .backfill(self.options.backfill_missing)
            .build(&self.steps, &from_style, &to_style)?;

        tracing::debug!(
            trigger = %self.trigger,
            rule = self.index,
            from,
            to,
            timelines = timelines.len(),
            "built transition"
        );

        Ok(TransitionInstruction {
            trigger: self.trigger.to_string(),
            from_state: from.to_string(),
            to_state: to.to_string(),
            from_style,
            to_style,
            timelines,
        })
    }

    fn state_style(&self, resolver: &Resolver<'_>, state: &str) -> Result<Style, ResolveError> {
        match self.states.lookup(state) {
            Some(style) => resolver.resolve_style(style),
            None => Ok(Style::new()),
        }
    }
}
