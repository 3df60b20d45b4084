//! Matchers deciding whether a transition rule applies to a state change.
//!
//! A matcher is either a structured expression parsed from a string or an
//! opaque predicate over `(from, to)`. Both are evaluated through
//! [`Matcher::evaluate`].

use std::fmt;
use std::sync::Arc;

/// Wildcard token matching any state.
pub const ANY_STATE: &str = "*";

/// Opaque `(from, to) -> bool` predicate.
pub type StatePredicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// One side of a transition expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateSide {
    /// `*`, matches every state.
    Any,
    /// A literal state name.
    Named(String),
}

impl StateSide {
    /// Side that accepts exactly `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Whether `state` satisfies this side; `Any` accepts every state, `void` included.
    pub fn accepts(&self, state: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => name == state,
        }
    }
}

impl fmt::Display for StateSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY_STATE),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Normalized transition matcher.
///
/// # Example
///
/// ```rust
/// use segue::core::{Matcher, StateSide};
///
/// let matcher = Matcher::Bidirectional {
///     a: StateSide::named("open"),
///     b: StateSide::named("closed"),
/// };
///
/// assert!(matcher.evaluate("open", "closed"));
/// assert!(matcher.evaluate("closed", "open"));
/// assert!(!matcher.evaluate("open", "open"));
/// ```
#[derive(Clone)]
pub enum Matcher {
    /// `a => b` with two literal names.
    Exact { from: String, to: String },
    /// `a => b` where at least one side is `*`.
    Wildcard { from: StateSide, to: StateSide },
    /// `a <=> b`, matching both orderings.
    Bidirectional { a: StateSide, b: StateSide },
    /// Comma-separated clauses; matches when any clause does.
    Compound(Vec<Matcher>),
    /// Caller-supplied predicate.
    Predicate(StatePredicate),
}

impl Matcher {
    /// Wrap a closure as an opaque predicate matcher.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Build the matcher for `from => to`, choosing `Exact` when neither
    /// side is a wildcard.
    pub fn directed(from: StateSide, to: StateSide) -> Self {
        match (from, to) {
            (StateSide::Named(from), StateSide::Named(to)) => Self::Exact { from, to },
            (from, to) => Self::Wildcard { from, to },
        }
    }

    /// Check whether the state change `from -> to` is accepted.
    ///
    /// Compound matchers stop at the first accepting clause, so predicates
    /// in later clauses are not invoked once an earlier one matched.
    pub fn evaluate(&self, from: &str, to: &str) -> bool {
        match self {
            Self::Exact { from: f, to: t } => f == from && t == to,
            Self::Wildcard { from: f, to: t } => f.accepts(from) && t.accepts(to),
            Self::Bidirectional { a, b } => {
                (a.accepts(from) && b.accepts(to)) || (b.accepts(from) && a.accepts(to))
            }
            Self::Compound(clauses) => clauses.iter().any(|c| c.evaluate(from, to)),
            Self::Predicate(predicate) => predicate(from, to),
        }
    }

    /// Whether this matcher wraps an opaque predicate.
    pub fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { from, to } => write!(f, "Exact({from} => {to})"),
            Self::Wildcard { from, to } => write!(f, "Wildcard({from} => {to})"),
            Self::Bidirectional { a, b } => write!(f, "Bidirectional({a} <=> {b})"),
            Self::Compound(clauses) => f.debug_tuple("Compound").field(clauses).finish(),
            Self::Predicate(_) => f.write_str("Predicate(<fn>)"),
        }
    }
}

impl PartialEq for Matcher {
    /// Structural equality; predicates compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact { from: a, to: b }, Self::Exact { from: c, to: d }) => a == c && b == d,
            (Self::Wildcard { from: a, to: b }, Self::Wildcard { from: c, to: d }) => {
                a == c && b == d
            }
            (Self::Bidirectional { a, b }, Self::Bidirectional { a: c, b: d }) => {
                a == c && b == d
            }
            (Self::Compound(a), Self::Compound(b)) => a == b,
            (Self::Predicate(a), Self::Predicate(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn exact_requires_both_sides() {
        let matcher = Matcher::directed(StateSide::named("a"), StateSide::named("b"));

        assert!(matches!(matcher, Matcher::Exact { .. }));
        assert!(matcher.evaluate("a", "b"));
        assert!(!matcher.evaluate("b", "a"));
        assert!(!matcher.evaluate("a", "c"));
    }

    #[test]
    fn wildcard_side_accepts_anything() {
        let matcher = Matcher::directed(StateSide::Any, StateSide::named("b"));

        assert!(matches!(matcher, Matcher::Wildcard { .. }));
        assert!(matcher.evaluate("a", "b"));
        assert!(matcher.evaluate("void", "b"));
        assert!(!matcher.evaluate("b", "a"));
    }

    #[test]
    fn compound_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let matcher = Matcher::Compound(vec![
            Matcher::directed(StateSide::named("a"), StateSide::named("b")),
            Matcher::predicate(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }),
        ]);

        assert!(matcher.evaluate("a", "b"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(matcher.evaluate("x", "y"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn predicate_receives_from_and_to() {
        let matcher = Matcher::predicate(|from, to| from == "left" && to == "right");

        assert!(matcher.is_predicate());
        assert!(matcher.evaluate("left", "right"));
        assert!(!matcher.evaluate("right", "left"));
    }

    #[test]
    fn debug_hides_predicate_body() {
        let matcher = Matcher::predicate(|_, _| true);
        assert_eq!(format!("{matcher:?}"), "Predicate(<fn>)");
    }
}
