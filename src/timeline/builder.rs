//! Expands compiled steps into concrete keyframe timelines.

use crate::core::{Style, StyleValue};
use crate::timeline::element::ElementContext;
use crate::timeline::instruction::{Keyframe, Timeline};
use crate::timeline::resolve::{ResolveError, Resolver};
use crate::timeline::step::{CompiledStep, TargetPlan, TimingPlan};
use crate::timeline::timing::{parse_timing, Timing};
use std::collections::BTreeSet;

/// Builds the timelines of one transition.
///
/// The current style starts as the source state's style and absorbs every
/// `style` step. Each `animate` step emits one timeline that begins at the
/// current style; afterwards the current style absorbs the timeline's final
/// keyframe.
pub struct TimelineBuilder<'a, E: ElementContext + ?Sized> {
    element: &'a E,
    resolver: Resolver<'a>,
    backfill: bool,
}

impl<'a, E: ElementContext + ?Sized> TimelineBuilder<'a, E> {
    pub fn new(element: &'a E, resolver: Resolver<'a>) -> Self {
        Self {
            element,
            resolver,
            backfill: true,
        }
    }

    /// Fill properties missing from some keyframes with `*`.
    pub fn backfill(mut self, enabled: bool) -> Self {
        self.backfill = enabled;
        self
    }

    /// Expand `steps`. `from_style` and `to_style` must already be resolved.
    pub fn build(
        &self,
        steps: &[CompiledStep],
        from_style: &Style,
        to_style: &Style,
    ) -> Result<Vec<Timeline>, ResolveError> {
        let mut current = from_style.clone();
        let mut cursor = 0.0;
        let mut timelines = Vec::new();

        for step in steps {
            match step {
                CompiledStep::Style(style) => {
                    current.merge(&self.resolver.resolve_style(style)?);
                }
                CompiledStep::Animate { timing, target } => {
                    let timing = self.timing(timing)?;
                    let mut keyframes = self.keyframes(target, &current, to_style)?;
                    if self.backfill {
                        backfill(&mut keyframes);
                    }
                    self.fill_auto(&mut keyframes);

                    if let Some(last) = keyframes.last() {
                        current.merge(&last.style);
                    }

                    let timeline = Timeline {
                        start: cursor,
                        duration: timing.duration,
                        delay: timing.delay,
                        easing: timing.easing,
                        keyframes,
                    };
                    cursor = timeline.end();
                    timelines.push(timeline);
                }
            }
        }

        Ok(timelines)
    }

    fn timing(&self, plan: &TimingPlan) -> Result<Timing, ResolveError> {
        match plan {
            TimingPlan::Fixed(timing) => Ok(timing.clone()),
            TimingPlan::Deferred(text) => {
                let text = self.resolver.resolve_text(text)?;
                Ok(parse_timing(&text)?)
            }
        }
    }

    fn keyframes(
        &self,
        target: &TargetPlan,
        current: &Style,
        to_style: &Style,
    ) -> Result<Vec<Keyframe>, ResolveError> {
        let start = Keyframe::new(0.0, current.clone());
        match target {
            TargetPlan::State => Ok(vec![start, Keyframe::new(1.0, to_style.clone())]),
            TargetPlan::Style(style) => Ok(vec![
                start,
                Keyframe::new(1.0, self.resolver.resolve_style(style)?),
            ]),
            TargetPlan::Keyframes(frames) => {
                let mut keyframes = frames
                    .iter()
                    .map(|(offset, style)| {
                        Ok(Keyframe::new(*offset, self.resolver.resolve_style(style)?))
                    })
                    .collect::<Result<Vec<_>, ResolveError>>()?;

                let starts_late = keyframes.first().is_none_or(|k| k.offset > 0.0);
                if starts_late {
                    keyframes.insert(0, start);
                } else {
                    keyframes[0].style = current.merged(&keyframes[0].style);
                }
                Ok(keyframes)
            }
        }
    }

    fn fill_auto(&self, keyframes: &mut [Keyframe]) {
        for keyframe in keyframes {
            let auto: Vec<String> = keyframe
                .style
                .iter()
                .filter(|(_, value)| value.is_auto())
                .map(|(property, _)| property.clone())
                .collect();
            for property in auto {
                if let Some(value) = self.element.computed_style(&property) {
                    keyframe.style.insert(property, value);
                }
            }
        }
    }
}

fn backfill(keyframes: &mut [Keyframe]) {
    let properties: BTreeSet<String> = keyframes
        .iter()
        .flat_map(|k| k.style.properties().cloned())
        .collect();

    for keyframe in keyframes {
        for property in &properties {
            if !keyframe.style.contains(property) {
                keyframe.style.insert(property.clone(), StyleValue::Auto);
            }
        }
    }
}
