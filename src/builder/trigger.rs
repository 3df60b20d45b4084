//! Builder for complete trigger definitions.

use crate::builder::transition::TransitionDefinition;
use crate::core::Style;
use crate::trigger::{CompiledTrigger, TriggerOptions};
use crate::validation::{compile_trigger_with, TriggerDefinitionError};

/// `state("a, b", style)`: binds one or more names to a style.
#[derive(Clone, Debug, PartialEq)]
pub struct StateDefinition {
    pub names: String,
    pub style: Style,
}

/// One entry of a trigger definition list. Order is significant.
#[derive(Clone, Debug)]
pub enum TriggerEntry {
    State(StateDefinition),
    Transition(TransitionDefinition),
}

impl From<StateDefinition> for TriggerEntry {
    fn from(definition: StateDefinition) -> Self {
        Self::State(definition)
    }
}

impl From<TransitionDefinition> for TriggerEntry {
    fn from(definition: TransitionDefinition) -> Self {
        Self::Transition(definition)
    }
}

/// Builder for compiling a trigger with a fluent API.
pub struct TriggerBuilder {
    name: String,
    entries: Vec<TriggerEntry>,
    options: TriggerOptions,
}

impl TriggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            options: TriggerOptions::default(),
        }
    }

    /// Add a state definition.
    pub fn state(mut self, names: impl Into<String>, style: Style) -> Self {
        self.entries.push(TriggerEntry::State(StateDefinition {
            names: names.into(),
            style,
        }));
        self
    }

    /// Add a transition definition.
    pub fn transition(mut self, definition: TransitionDefinition) -> Self {
        self.entries.push(TriggerEntry::Transition(definition));
        self
    }

    /// Add any pre-built entry.
    pub fn entry(mut self, entry: impl Into<TriggerEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn options(mut self, options: TriggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Compile the trigger, reporting every definition defect at once.
    pub fn build(self) -> Result<CompiledTrigger, TriggerDefinitionError> {
        compile_trigger_with(&self.name, self.entries, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{animate, style};
    use crate::trigger::UnresolvedLocals;

    #[test]
    fn fluent_api_builds_trigger() {
        let trigger = TriggerBuilder::new("panel")
            .state("open", Style::new().set("height", "200px"))
            .transition(
                TransitionDefinition::new("open => closed")
                    .step(animate(250, Style::new().set("height", 0))),
            )
            .build()
            .unwrap();

        assert_eq!(trigger.name(), "panel");
        assert_eq!(trigger.transition_factories().len(), 1);
        assert!(trigger.states().contains("open"));
    }

    #[test]
    fn builder_surfaces_definition_errors() {
        let result = TriggerBuilder::new("broken")
            .transition(TransitionDefinition::new("nope"))
            .build();

        let err = result.unwrap_err();
        assert_eq!(err.name, "broken");
        assert_eq!(err.errors.len(), 1);
    }

    #[test]
    fn options_are_carried_into_the_trigger() {
        let trigger = TriggerBuilder::new("opts")
            .options(TriggerOptions {
                unresolved_locals: UnresolvedLocals::Literal,
                ..TriggerOptions::default()
            })
            .entry(TransitionDefinition::new("* => *").step(style(Style::new())))
            .build()
            .unwrap();

        assert_eq!(
            trigger.options().unresolved_locals,
            UnresolvedLocals::Literal
        );
    }
}
