//! Checks and compilation of individual definition entries.
//!
//! Each function reports every defect it finds for its entry instead of
//! stopping at the first one.

use crate::builder::{
    AnimateTarget, AnimationStep, ExpressionSource, KeyframeStep, StateDefinition, TimingSource,
    TransitionDefinition,
};
use crate::core::{parse_expression_all, split_state_names, Locals, Matcher, Style};
use crate::timeline::{has_tokens, parse_timing, CompiledStep, TargetPlan, Timing, TimingPlan};
use crate::validation::violations::DefinitionError;

/// Pieces of a transition that passed validation.
pub(crate) struct CompiledTransition {
    pub matcher: Matcher,
    pub steps: Vec<CompiledStep>,
    pub locals: Locals,
}

pub(crate) fn check_state(definition: &StateDefinition) -> Result<(), DefinitionError> {
    if split_state_names(&definition.names).iter().any(|n| n.is_empty()) {
        return Err(DefinitionError::EmptyStateName {
            names: definition.names.clone(),
        });
    }
    Ok(())
}

pub(crate) fn compile_transition(
    definition: TransitionDefinition,
) -> Result<CompiledTransition, Vec<DefinitionError>> {
    let mut errors = Vec::new();

    let matcher = match definition.expression {
        ExpressionSource::Text(text) => parse_expression_all(&text)
            .map_err(|e| errors.extend(e.into_iter().map(DefinitionError::from)))
            .ok(),
        ExpressionSource::Predicate(predicate) => Some(Matcher::Predicate(predicate)),
    };

    let steps = compile_steps(&definition.steps)
        .map_err(|e| errors.extend(e))
        .ok();

    match (matcher, steps) {
        (Some(matcher), Some(steps)) if errors.is_empty() => Ok(CompiledTransition {
            matcher,
            steps,
            locals: definition.locals,
        }),
        _ => Err(errors),
    }
}

pub(crate) fn compile_steps(
    steps: &[AnimationStep],
) -> Result<Vec<CompiledStep>, Vec<DefinitionError>> {
    let mut compiled = Vec::with_capacity(steps.len());
    let mut errors = Vec::new();

    for step in steps {
        match compile_step(step) {
            Ok(step) => compiled.push(step),
            Err(e) => errors.extend(e),
        }
    }

    if errors.is_empty() {
        Ok(compiled)
    } else {
        Err(errors)
    }
}

fn compile_step(step: &AnimationStep) -> Result<CompiledStep, Vec<DefinitionError>> {
    match step {
        AnimationStep::Style(style) => Ok(CompiledStep::Style(style.clone())),
        AnimationStep::Animate { timing, target } => {
            let mut errors = Vec::new();
            let timing = compile_timing(timing)
                .map_err(|e| errors.push(e))
                .ok();
            let target = compile_target(target)
                .map_err(|e| errors.extend(e))
                .ok();

            match (timing, target) {
                (Some(timing), Some(target)) if errors.is_empty() => {
                    Ok(CompiledStep::Animate { timing, target })
                }
                _ => Err(errors),
            }
        }
    }
}

fn compile_timing(timing: &TimingSource) -> Result<TimingPlan, DefinitionError> {
    match timing {
        TimingSource::Millis(ms) => Ok(TimingPlan::Fixed(Timing::from_millis(*ms)?)),
        TimingSource::Text(text) if has_tokens(text) => Ok(TimingPlan::Deferred(text.clone())),
        TimingSource::Text(text) => Ok(TimingPlan::Fixed(parse_timing(text)?)),
    }
}

fn compile_target(target: &AnimateTarget) -> Result<TargetPlan, Vec<DefinitionError>> {
    match target {
        AnimateTarget::State => Ok(TargetPlan::State),
        AnimateTarget::Style(style) => Ok(TargetPlan::Style(style.clone())),
        AnimateTarget::Keyframes(frames) => compile_keyframes(frames).map(TargetPlan::Keyframes),
    }
}

/// Resolve keyframe offsets.
///
/// Either every keyframe carries an offset or none does; without offsets
/// they are spread evenly over `[0, 1]` and a lone keyframe sits at 1.
fn compile_keyframes(
    frames: &[KeyframeStep],
) -> Result<Vec<(f64, Style)>, Vec<DefinitionError>> {
    if frames.is_empty() {
        return Err(vec![DefinitionError::EmptyKeyframes]);
    }

    let provided = frames.iter().filter(|f| f.offset.is_some()).count();
    if provided == 0 {
        let last = frames.len().saturating_sub(1);
        return Ok(frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let offset = if last == 0 { 1.0 } else { i as f64 / last as f64 };
                (offset, frame.style.clone())
            })
            .collect());
    }

    let mut errors = Vec::new();
    if provided < frames.len() {
        errors.push(DefinitionError::PartialKeyframeOffsets);
    }

    let offsets: Vec<f64> = frames.iter().filter_map(|f| f.offset).collect();
    if let Some(&offset) = offsets.iter().find(|o| !(0.0..=1.0).contains(*o)) {
        errors.push(DefinitionError::KeyframeOffsetOutOfRange { offset });
    }
    if offsets.windows(2).any(|w| w[1] < w[0]) {
        errors.push(DefinitionError::KeyframeOffsetsOutOfOrder);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(frames
        .iter()
        .filter_map(|f| f.offset.map(|o| (o, f.style.clone())))
        .collect())
}
