//! Named variables substituted into style values when a transition is built.

use super::style::StyleValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix marking a variable token inside a style value.
pub const VARIABLE_SIGIL: char = '$';

/// Mapping of variable name to value.
///
/// Names are stored without the sigil, so `"$a"` and `"a"` address the
/// same entry.
///
/// # Example
///
/// ```rust
/// use segue::core::{Locals, StyleValue};
///
/// let locals = Locals::new().set("$a", "100px");
///
/// assert_eq!(locals.get("a"), Some(&StyleValue::Text("100px".into())));
/// assert_eq!(locals.get("$a"), locals.get("a"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Locals {
    values: BTreeMap<String, StyleValue>,
}

impl Locals {
    /// Create an empty locals map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these locals with `name` bound to `value`; a leading `$` is ignored.
    pub fn set(mut self, name: &str, value: impl Into<StyleValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value` in place.
    pub fn insert(&mut self, name: &str, value: impl Into<StyleValue>) {
        self.values
            .insert(normalize_name(name).to_string(), value.into());
    }

    /// Value bound to `name`, with or without its `$`.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.values.get(normalize_name(name))
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(normalize_name(name))
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no name is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over names (without `$`) and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn normalize_name(name: &str) -> &str {
    name.strip_prefix(VARIABLE_SIGIL).unwrap_or(name)
}

/// Two-level lookup: overrides first, then defaults.
///
/// An override only shadows the keys it contains.
#[derive(Clone, Copy, Debug)]
pub struct LocalsScope<'a> {
    overrides: Option<&'a Locals>,
    defaults: &'a Locals,
}

impl<'a> LocalsScope<'a> {
    /// Scope over `defaults`, shadowed by `overrides` when given.
    pub fn new(defaults: &'a Locals, overrides: Option<&'a Locals>) -> Self {
        Self {
            overrides,
            defaults,
        }
    }

    /// Value of `name` from the overrides, else from the defaults.
    pub fn lookup(&self, name: &str) -> Option<&'a StyleValue> {
        self.overrides
            .and_then(|o| o.get(name))
            .or_else(|| self.defaults.get(name))
    }
}
