//! Options controlling how a trigger compiles and builds.

use serde::{Deserialize, Serialize};

/// What to do with a `$name` token that has neither an override nor a
/// default value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedLocals {
    /// Fail the build with `ResolveError::UnresolvedLocal`.
    #[default]
    Error,

    /// Keep the token text in the output and log a warning.
    Literal,
}

/// Per-trigger configuration.
///
/// Deserializes with defaults for missing fields, so hosts can keep it in
/// their own configuration files.
///
/// # Example
///
/// ```rust
/// use segue::trigger::{TriggerOptions, UnresolvedLocals};
///
/// let options: TriggerOptions =
///     serde_json::from_str(r#"{ "unresolved_locals": "literal" }"#).unwrap();
///
/// assert_eq!(options.unresolved_locals, UnresolvedLocals::Literal);
/// assert!(options.backfill_missing);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerOptions {
    pub unresolved_locals: UnresolvedLocals,

    /// Fill properties missing from some keyframes of a timeline with `*`.
    pub backfill_missing: bool,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            unresolved_locals: UnresolvedLocals::Error,
            backfill_missing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let options = TriggerOptions::default();
        assert_eq!(options.unresolved_locals, UnresolvedLocals::Error);
        assert!(options.backfill_missing);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let options: TriggerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TriggerOptions::default());
    }

    #[test]
    fn options_roundtrip() {
        let options = TriggerOptions {
            unresolved_locals: UnresolvedLocals::Literal,
            backfill_missing: false,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(serde_json::from_str::<TriggerOptions>(&json).unwrap(), options);
    }
}
