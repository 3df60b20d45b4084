//! Raw animation steps as authored in a transition definition.

use crate::core::Style;

/// Timing as written by the author: milliseconds or a timing string such as
/// `"1s 100ms ease-out"`.
#[derive(Clone, Debug, PartialEq)]
pub enum TimingSource {
    Millis(f64),
    Text(String),
}

impl From<f64> for TimingSource {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

impl From<i32> for TimingSource {
    fn from(value: i32) -> Self {
        Self::Millis(f64::from(value))
    }
}

impl From<u32> for TimingSource {
    fn from(value: u32) -> Self {
        Self::Millis(f64::from(value))
    }
}

impl From<&str> for TimingSource {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TimingSource {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One entry of a `keyframes(...)` target.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeStep {
    pub style: Style,
    pub offset: Option<f64>,
}

/// What an `animate(...)` step animates towards.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimateTarget {
    /// The style registered for the destination state.
    State,
    /// An explicit style.
    Style(Style),
    /// Explicit keyframes, optionally carrying offsets.
    Keyframes(Vec<KeyframeStep>),
}

impl From<Style> for AnimateTarget {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

/// A single authored step.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationStep {
    /// Set styles immediately; they become the starting point of the next
    /// animation.
    Style(Style),
    /// Animate from the current style to `target` over `timing`.
    Animate {
        timing: TimingSource,
        target: AnimateTarget,
    },
}

impl From<Style> for AnimationStep {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}
