//! Definition defects and the grouped trigger error.

use crate::core::ParseError;
use crate::timeline::TimingError;
use thiserror::Error;

/// Separator placed before each defect in a grouped message.
const LINE_START: &str = "\n - ";

/// A single structural defect found while compiling a trigger definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Timing(#[from] TimingError),

    #[error("State names must not be empty (found in \"{names}\")")]
    EmptyStateName { names: String },

    #[error("keyframes() must contain at least one style() step")]
    EmptyKeyframes,

    #[error("Please ensure that all keyframe offsets are between 0 and 1")]
    KeyframeOffsetOutOfRange { offset: f64 },

    #[error("Please ensure that all keyframe offsets are in order")]
    KeyframeOffsetsOutOfOrder,

    #[error("Not all style() steps within the declared keyframes() contain offsets")]
    PartialKeyframeOffsets,
}

/// Every defect of a trigger definition, reported together.
///
/// # Example
///
/// ```rust
/// use segue::builder::transition;
/// use segue::validation::compile_trigger;
///
/// let err = compile_trigger(
///     "myAnimation",
///     vec![
///         transition("somethingThatIsWrong", vec![]),
///         transition(":angular", vec![]),
///     ],
/// )
/// .unwrap_err();
///
/// let message = err.to_string();
/// assert!(message.starts_with("Animation parsing for the myAnimation trigger have failed:"));
/// assert_eq!(err.errors.len(), 2);
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Animation parsing for the {name} trigger have failed:{}", bullets(.errors))]
pub struct TriggerDefinitionError {
    pub name: String,
    pub errors: Vec<DefinitionError>,
}

impl TriggerDefinitionError {
    pub fn new(name: impl Into<String>, errors: Vec<DefinitionError>) -> Self {
        Self {
            name: name.into(),
            errors,
        }
    }
}

fn bullets(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(|e| format!("{LINE_START}{e}"))
        .collect()
}
