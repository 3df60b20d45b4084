//! Definition API for authoring triggers.
//!
//! This module provides free functions mirroring the usual animation DSL
//! (`state`, `transition`, `style`, `animate`, `keyframes`) plus fluent
//! builders, so a definition list reads close to how it is written by hand.

pub mod macros;
pub mod step;
pub mod transition;
pub mod trigger;

pub use step::{AnimateTarget, AnimationStep, KeyframeStep, TimingSource};
pub use transition::{ExpressionSource, TransitionDefinition};
pub use trigger::{StateDefinition, TriggerBuilder, TriggerEntry};

use crate::core::{Locals, Style};

/// Bind every comma-separated name in `names` to `style`.
///
/// # Example
///
/// ```
/// use segue::builder::state;
/// use segue::style;
///
/// let entry = state("on, off", style! { "width" => 50 });
/// ```
pub fn state(names: impl Into<String>, style: Style) -> TriggerEntry {
    TriggerEntry::State(StateDefinition {
        names: names.into(),
        style,
    })
}

/// A transition with no default locals.
///
/// # Example
///
/// ```
/// use segue::builder::{animate, transition};
/// use segue::style;
///
/// let entry = transition("a => b", vec![animate(1234, style! { "opacity" => 1 })]);
/// ```
pub fn transition(
    expression: impl Into<ExpressionSource>,
    steps: Vec<AnimationStep>,
) -> TriggerEntry {
    TriggerEntry::Transition(TransitionDefinition::new(expression).steps(steps))
}

/// A transition with default locals for its variable tokens.
pub fn transition_with(
    expression: impl Into<ExpressionSource>,
    steps: Vec<AnimationStep>,
    locals: Locals,
) -> TriggerEntry {
    TriggerEntry::Transition(
        TransitionDefinition::new(expression)
            .steps(steps)
            .locals(locals),
    )
}

/// Use a predicate over `(from, to)` in place of an expression string.
///
/// # Example
///
/// ```
/// use segue::builder::{animate_to_state, transition, when};
///
/// let entry = transition(
///     when(|from, to| from != to),
///     vec![animate_to_state(300)],
/// );
/// ```
pub fn when<F>(predicate: F) -> ExpressionSource
where
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
    ExpressionSource::predicate(predicate)
}

/// Set styles immediately.
pub fn style(style: Style) -> AnimationStep {
    AnimationStep::Style(style)
}

/// Animate towards `target` (a [`Style`] or [`keyframes`]).
pub fn animate(
    timing: impl Into<TimingSource>,
    target: impl Into<AnimateTarget>,
) -> AnimationStep {
    AnimationStep::Animate {
        timing: timing.into(),
        target: target.into(),
    }
}

/// Animate towards the destination state's registered style.
pub fn animate_to_state(timing: impl Into<TimingSource>) -> AnimationStep {
    AnimationStep::Animate {
        timing: timing.into(),
        target: AnimateTarget::State,
    }
}

/// Explicit keyframes for an `animate` step.
pub fn keyframes(steps: Vec<KeyframeStep>) -> AnimateTarget {
    AnimateTarget::Keyframes(steps)
}

/// Keyframe whose offset is derived from its position.
pub fn keyframe(style: Style) -> KeyframeStep {
    KeyframeStep {
        style,
        offset: None,
    }
}

/// Keyframe at an explicit offset in `[0, 1]`.
pub fn keyframe_at(offset: f64, style: Style) -> KeyframeStep {
    KeyframeStep {
        style,
        offset: Some(offset),
    }
}
