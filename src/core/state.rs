//! Registry of named logical states and their style snapshots.
//!
//! A single state definition may name several aliases separated by commas
//! (`"on, off"`); every alias is bound to the same shared style.

use super::style::Style;
use std::collections::BTreeMap;
use std::sync::Arc;

/// State name used for an element that is not attached yet / anymore.
pub const VOID_STATE: &str = "void";

/// Split a comma-separated list of state names, trimming each entry.
///
/// Empty entries are preserved so callers can report them.
pub fn split_state_names(names_csv: &str) -> Vec<&str> {
    names_csv.split(',').map(str::trim).collect()
}

/// Named state to style lookup, built once per trigger.
///
/// # Example
///
/// ```rust
/// use segue::core::{StateRegistry, Style};
///
/// let mut registry = StateRegistry::new();
/// registry.define("on, off", Style::new().set("width", 50));
///
/// assert_eq!(registry.lookup("on"), registry.lookup("off"));
/// assert!(registry.lookup("missing").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateRegistry {
    states: BTreeMap<String, Arc<Style>>,
}

impl StateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every name in `names_csv` to `style`.
    ///
    /// A name that is already registered is overwritten. Empty names are
    /// skipped.
    pub fn define(&mut self, names_csv: &str, style: Style) {
        let shared = Arc::new(style);
        for name in split_state_names(names_csv) {
            if name.is_empty() {
                continue;
            }
            self.states.insert(name.to_string(), Arc::clone(&shared));
        }
    }

    /// Style bound to `name`, if defined.
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        self.states.get(name).map(Arc::as_ref)
    }

    /// Shared handle to the stored style, for identity comparisons.
    pub fn lookup_shared(&self, name: &str) -> Option<Arc<Style>> {
        self.states.get(name).cloned()
    }

    /// Whether `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Number of defined names, aliases included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state is defined.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Defined names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Iterate over names and their styles.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.states.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StyleValue;

    #[test]
    fn aliases_share_one_style() {
        let mut registry = StateRegistry::new();
        registry.define("on, off", Style::new().set("width", 50));

        let on = registry.lookup_shared("on").unwrap();
        let off = registry.lookup_shared("off").unwrap();

        assert!(Arc::ptr_eq(&on, &off));
        assert_eq!(on.get("width"), Some(&StyleValue::Number(50.0)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn last_definition_wins() {
        let mut registry = StateRegistry::new();
        registry.define("a", Style::new().set("width", 1));
        registry.define("a, b", Style::new().set("width", 2));

        assert_eq!(
            registry.lookup("a").unwrap().get("width"),
            Some(&StyleValue::Number(2.0))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn names_are_trimmed_and_empty_entries_skipped() {
        let mut registry = StateRegistry::new();
        registry.define("  open ,, closed  ", Style::new());

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["closed", "open"]);
    }

    #[test]
    fn split_keeps_empty_entries() {
        assert_eq!(split_state_names("a, ,b"), vec!["a", "", "b"]);
    }
}
