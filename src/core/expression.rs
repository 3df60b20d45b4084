//! Parser for transition expression strings.
//!
//! Grammar:
//!
//! ```text
//! expr   := clause (',' clause)*
//! clause := side '=>' side | side '<=>' side | alias
//! side   := '*' | identifier
//! alias  := ':enter' | ':leave'
//! ```
//!
//! Parsing is pure. Every clause that does not fit the grammar produces its
//! own [`ParseError`]; nothing is silently dropped.

use super::matcher::{Matcher, StateSide, ANY_STATE};
use super::state::VOID_STATE;
use thiserror::Error;

const DIRECTED: &str = "=>";
const BIDIRECTIONAL: &str = "<=>";

/// Errors produced while parsing a transition expression.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("The provided transition expression \"{expression}\" is not supported")]
    UnsupportedExpression { expression: String },

    #[error("The transition alias value \"{alias}\" is not supported")]
    UnsupportedAlias { alias: String },
}

/// Parse `source` into a matcher, reporting only the first defect.
///
/// # Example
///
/// ```rust
/// use segue::core::parse_expression;
///
/// let matcher = parse_expression("a => b, :enter").unwrap();
/// assert!(matcher.evaluate("a", "b"));
/// assert!(matcher.evaluate("void", "anything"));
///
/// assert!(parse_expression("somethingThatIsWrong").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Matcher, ParseError> {
    parse_expression_all(source).map_err(|mut errors| errors.remove(0))
}

/// Parse `source` into a matcher, reporting every defective clause.
///
/// The returned error list is never empty.
pub fn parse_expression_all(source: &str) -> Result<Matcher, Vec<ParseError>> {
    let mut clauses = Vec::new();
    let mut errors = Vec::new();

    for clause in source.split(',') {
        match parse_clause(clause.trim()) {
            Ok(matcher) => clauses.push(matcher),
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if clauses.len() == 1 {
        Ok(clauses.remove(0))
    } else {
        Ok(Matcher::Compound(clauses))
    }
}

fn parse_clause(clause: &str) -> Result<Matcher, ParseError> {
    if let Some(alias) = clause.strip_prefix(':') {
        return parse_alias(alias);
    }

    let unsupported = || ParseError::UnsupportedExpression {
        expression: clause.to_string(),
    };

    if let Some((lhs, rhs)) = clause.split_once(BIDIRECTIONAL) {
        let a = parse_side(lhs).ok_or_else(unsupported)?;
        let b = parse_side(rhs).ok_or_else(unsupported)?;
        return Ok(Matcher::Bidirectional { a, b });
    }

    if let Some((lhs, rhs)) = clause.split_once(DIRECTED) {
        let from = parse_side(lhs).ok_or_else(unsupported)?;
        let to = parse_side(rhs).ok_or_else(unsupported)?;
        return Ok(Matcher::directed(from, to));
    }

    Err(unsupported())
}

fn parse_alias(alias: &str) -> Result<Matcher, ParseError> {
    match alias {
        "enter" => Ok(Matcher::Wildcard {
            from: StateSide::named(VOID_STATE),
            to: StateSide::Any,
        }),
        "leave" => Ok(Matcher::Wildcard {
            from: StateSide::Any,
            to: StateSide::named(VOID_STATE),
        }),
        other => Err(ParseError::UnsupportedAlias {
            alias: format!(":{other}"),
        }),
    }
}

fn parse_side(side: &str) -> Option<StateSide> {
    let side = side.trim();
    if side == ANY_STATE {
        return Some(StateSide::Any);
    }
    let is_identifier = !side.is_empty()
        && side
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    is_identifier.then(|| StateSide::named(side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_clause_parses_to_exact() {
        let matcher = parse_expression("a => b").unwrap();
        assert_eq!(
            matcher,
            Matcher::Exact {
                from: "a".to_string(),
                to: "b".to_string()
            }
        );
    }

    #[test]
    fn whitespace_is_optional() {
        assert_eq!(
            parse_expression("a=>b").unwrap(),
            parse_expression("  a   =>   b ").unwrap()
        );
    }

    #[test]
    fn wildcard_sides_parse() {
        let matcher = parse_expression("* => b").unwrap();
        assert_eq!(
            matcher,
            Matcher::Wildcard {
                from: StateSide::Any,
                to: StateSide::named("b")
            }
        );
    }

    #[test]
    fn bidirectional_clause_parses() {
        let matcher = parse_expression("a <=> b").unwrap();
        assert!(matches!(matcher, Matcher::Bidirectional { .. }));
        assert!(matcher.evaluate("a", "b"));
        assert!(matcher.evaluate("b", "a"));
    }

    #[test]
    fn comma_separated_clauses_form_compound() {
        let matcher = parse_expression("a=>b, b=>a, c=>*").unwrap();
        match &matcher {
            Matcher::Compound(clauses) => assert_eq!(clauses.len(), 3),
            other => panic!("expected compound, got {other:?}"),
        }
        assert!(matcher.evaluate("a", "b"));
        assert!(matcher.evaluate("b", "a"));
        assert!(matcher.evaluate("c", "a"));
        assert!(!matcher.evaluate("a", "c"));
    }

    #[test]
    fn enter_and_leave_desugar_around_void() {
        let enter = parse_expression(":enter").unwrap();
        let leave = parse_expression(":leave").unwrap();

        assert!(enter.evaluate("void", "anything"));
        assert!(!enter.evaluate("anything", "void"));
        assert!(leave.evaluate("anything", "void"));
        assert!(!leave.evaluate("void", "anything"));
    }

    #[test]
    fn unknown_alias_names_the_alias() {
        let err = parse_expression(":angular").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedAlias {
                alias: ":angular".to_string()
            }
        );
        assert!(err.to_string().contains("\":angular\""));
    }

    #[test]
    fn malformed_expression_names_the_expression() {
        let err = parse_expression("somethingThatIsWrong").unwrap_err();
        assert!(err
            .to_string()
            .contains("The provided transition expression \"somethingThatIsWrong\" is not supported"));
    }

    #[test]
    fn malformed_sides_are_rejected() {
        for source in ["a => ", "=> b", "a => b c", "a => => b", "", "a <=> !"] {
            assert!(
                parse_expression(source).is_err(),
                "expected {source:?} to fail"
            );
        }
    }

    #[test]
    fn every_bad_clause_is_reported() {
        let errors = parse_expression_all("a => b, nope, :bogus").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ParseError::UnsupportedExpression { .. }));
        assert!(matches!(errors[1], ParseError::UnsupportedAlias { .. }));
    }
}
