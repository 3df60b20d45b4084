//! Builder for transition definitions.

use crate::builder::step::AnimationStep;
use crate::core::{Locals, StatePredicate, StyleValue};
use std::fmt;
use std::sync::Arc;

/// How a transition selects state changes: an expression string, or an
/// opaque predicate that bypasses parsing.
#[derive(Clone)]
pub enum ExpressionSource {
    Text(String),
    Predicate(StatePredicate),
}

impl ExpressionSource {
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

impl fmt::Debug for ExpressionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Predicate(_) => f.write_str("Predicate(<fn>)"),
        }
    }
}

impl From<&str> for ExpressionSource {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ExpressionSource {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An uncompiled transition: expression, steps, and default locals.
#[derive(Clone, Debug)]
pub struct TransitionDefinition {
    pub expression: ExpressionSource,
    pub steps: Vec<AnimationStep>,
    pub locals: Locals,
}

impl TransitionDefinition {
    /// Start a definition for `expression` with no steps.
    pub fn new(expression: impl Into<ExpressionSource>) -> Self {
        Self {
            expression: expression.into(),
            steps: Vec::new(),
            locals: Locals::new(),
        }
    }

    /// Append one step.
    pub fn step(mut self, step: impl Into<AnimationStep>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Append several steps.
    pub fn steps(mut self, steps: Vec<AnimationStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Replace the default locals.
    pub fn locals(mut self, locals: Locals) -> Self {
        self.locals = locals;
        self
    }

    /// Add a single default local.
    pub fn local(mut self, name: &str, value: impl Into<StyleValue>) -> Self {
        self.locals.insert(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Style;

    #[test]
    fn fluent_api_accumulates_steps_and_locals() {
        let definition = TransitionDefinition::new("a => b")
            .step(Style::new().set("height", "$a"))
            .local("$a", "10px")
            .local("b", 2);

        assert_eq!(definition.steps.len(), 1);
        assert_eq!(definition.locals.len(), 2);
        assert!(matches!(definition.expression, ExpressionSource::Text(ref t) if t == "a => b"));
    }

    #[test]
    fn predicate_source_is_opaque_in_debug() {
        let source = ExpressionSource::predicate(|_, _| true);
        assert_eq!(format!("{source:?}"), "Predicate(<fn>)");
    }
}
