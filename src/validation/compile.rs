//! Trigger compilation with defect accumulation.

use crate::builder::TriggerEntry;
use crate::core::StateRegistry;
use crate::trigger::{CompiledTrigger, TransitionRule, TriggerOptions};
use crate::validation::rules::{check_state, compile_transition, CompiledTransition};
use crate::validation::violations::{DefinitionError, TriggerDefinitionError};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionError>>;

/// Compile a trigger definition with default options.
pub fn compile_trigger(
    name: &str,
    definitions: Vec<TriggerEntry>,
) -> Result<CompiledTrigger, TriggerDefinitionError> {
    compile_trigger_with(name, definitions, TriggerOptions::default())
}

/// Compile a trigger definition.
///
/// Every entry is checked; if any defect is found the whole trigger is
/// rejected with a [`TriggerDefinitionError`] listing all of them in
/// declaration order. Rules keep their declaration order.
#[tracing::instrument(skip(definitions, options), fields(entries = definitions.len()))]
pub fn compile_trigger_with(
    name: &str,
    definitions: Vec<TriggerEntry>,
    options: TriggerOptions,
) -> Result<CompiledTrigger, TriggerDefinitionError> {
    let mut registry = StateRegistry::new();
    let mut transitions: Vec<CompiledTransition> = Vec::new();
    let mut checks: Vec<Check> = Vec::new();

    for entry in definitions {
        match entry {
            TriggerEntry::State(definition) => match check_state(&definition) {
                Ok(()) => registry.define(&definition.names, definition.style),
                Err(error) => checks.push(Validation::fail(error)),
            },
            TriggerEntry::Transition(definition) => match compile_transition(definition) {
                Ok(transition) => transitions.push(transition),
                Err(errors) => checks.extend(errors.into_iter().map(Validation::fail)),
            },
        }
    }

    // Accumulate ALL failures before deciding
    if let Validation::Failure(errors) = Validation::all_vec(checks) {
        let errors: Vec<DefinitionError> = errors.iter().cloned().collect();
        tracing::warn!(trigger = name, defects = errors.len(), "trigger definition rejected");
        return Err(TriggerDefinitionError::new(name, errors));
    }

    let trigger: Arc<str> = Arc::from(name);
    let states = Arc::new(registry);
    let options = Arc::new(options);

    let rules: Vec<TransitionRule> = transitions
        .into_iter()
        .enumerate()
        .map(|(index, transition)| TransitionRule {
            index,
            trigger: Arc::clone(&trigger),
            matcher: transition.matcher,
            steps: transition.steps,
            locals: transition.locals,
            states: Arc::clone(&states),
            options: Arc::clone(&options),
        })
        .collect();

    tracing::debug!(
        trigger = name,
        states = states.len(),
        rules = rules.len(),
        "trigger compiled"
    );

    Ok(CompiledTrigger::new(trigger, states, rules, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{animate, keyframe_at, keyframes, state, transition};
    use crate::core::{ParseError, Style};
    use crate::timeline::TimingError;
    use crate::style;

    #[test]
    fn valid_definition_compiles_in_order() {
        let trigger = compile_trigger(
            "ordered",
            vec![
                transition("a => b", vec![animate(1, style! {})]),
                state("a, b", style! { "width" => 50 }),
                transition("b => a", vec![animate(2, style! {})]),
            ],
        )
        .unwrap();

        let indices: Vec<usize> = trigger
            .transition_factories()
            .iter()
            .map(|r| r.index())
            .collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(trigger.states().len(), 2);
    }

    #[test]
    fn defects_across_entries_are_grouped() {
        let err = compile_trigger(
            "broken",
            vec![
                transition("somethingThatIsWrong", vec![]),
                state(" , a", Style::new()),
                transition(":angular", vec![]),
                transition(
                    "a => b",
                    vec![animate(
                        10,
                        keyframes(vec![keyframe_at(0.5, style! {}), keyframe_at(0.1, style! {})]),
                    )],
                ),
            ],
        )
        .unwrap_err();

        assert_eq!(err.name, "broken");
        assert_eq!(err.errors.len(), 4);
        assert_eq!(
            err.errors[0],
            DefinitionError::Parse(ParseError::UnsupportedExpression {
                expression: "somethingThatIsWrong".to_string()
            })
        );
        assert!(matches!(err.errors[1], DefinitionError::EmptyStateName { .. }));
        assert_eq!(
            err.errors[2],
            DefinitionError::Parse(ParseError::UnsupportedAlias {
                alias: ":angular".to_string()
            })
        );
        assert_eq!(err.errors[3], DefinitionError::KeyframeOffsetsOutOfOrder);
    }

    #[test]
    fn overflowing_duration_fails_compilation() {
        let duration = format!("1{}ms", "0".repeat(400));
        let err = compile_trigger(
            "endless",
            vec![transition("* => *", vec![animate(duration.as_str(), style! {})])],
        )
        .unwrap_err();

        assert_eq!(
            err.errors,
            vec![DefinitionError::Timing(TimingError::Invalid { value: duration })]
        );
    }

    #[test]
    fn empty_definition_compiles_to_empty_trigger() {
        let trigger = compile_trigger("empty", vec![]).unwrap();
        assert!(trigger.transition_factories().is_empty());
        assert!(trigger.match_transition("a", "b").is_none());
    }
}
