//! Validated animation steps, ready to be expanded into timelines.

use crate::core::Style;
use crate::timeline::timing::Timing;

/// Timing of a compiled `animate` step.
#[derive(Clone, Debug, PartialEq)]
pub enum TimingPlan {
    /// Known at compile time.
    Fixed(Timing),
    /// Contains variable tokens; parsed after substitution.
    Deferred(String),
}

/// Target of a compiled `animate` step.
#[derive(Clone, Debug, PartialEq)]
pub enum TargetPlan {
    State,
    Style(Style),
    /// Keyframes with resolved offsets, in order.
    Keyframes(Vec<(f64, Style)>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CompiledStep {
    Style(Style),
    Animate { timing: TimingPlan, target: TargetPlan },
}

impl CompiledStep {
    pub fn is_animate(&self) -> bool {
        matches!(self, Self::Animate { .. })
    }
}
