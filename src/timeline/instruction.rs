//! Built transition instructions handed to the playback layer.

use crate::core::{Style, StyleValue};
use serde::{Deserialize, Serialize};

/// A style snapshot at a normalized position of a timeline.
///
/// Serializes flat, as the style's properties next to `offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position in `[0, 1]`.
    pub offset: f64,
    #[serde(flatten)]
    pub style: Style,
}

impl Keyframe {
    /// Create a keyframe at `offset`.
    pub fn new(offset: f64, style: Style) -> Self {
        Self { offset, style }
    }

    /// Value of `property` at this keyframe.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.style.get(property)
    }
}

/// Keyframes animated over one duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Start time relative to the beginning of the transition, in ms.
    pub start: f64,
    pub duration: f64,
    pub delay: f64,
    pub easing: Option<String>,
    /// Ordered by non-decreasing offset.
    pub keyframes: Vec<Keyframe>,
}

impl Timeline {
    /// Time at which this timeline finishes, in ms.
    pub fn end(&self) -> f64 {
        self.start + self.delay + self.duration
    }
}

/// The output of building a matched transition rule.
///
/// Instructions are plain values with no link back to the trigger that
/// produced them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionInstruction {
    pub trigger: String,
    pub from_state: String,
    pub to_state: String,
    /// Resolved style registered for `from_state` (empty if none).
    pub from_style: Style,
    /// Resolved style registered for `to_state` (empty if none).
    pub to_style: Style,
    pub timelines: Vec<Timeline>,
}

impl TransitionInstruction {
    /// Total running time of all timelines, in ms.
    pub fn total_time(&self) -> f64 {
        self.timelines.iter().map(Timeline::end).fold(0.0, f64::max)
    }

    /// Whether the transition animates nothing.
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}
