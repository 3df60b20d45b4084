//! Variable substitution for style values and timing strings.

use crate::core::{LocalsScope, Style, StyleValue, VARIABLE_SIGIL};
use crate::timeline::timing::TimingError;
use crate::trigger::UnresolvedLocals;
use thiserror::Error;

/// Errors raised while building a transition from runtime data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    #[error("Please provide a value for the animation param ${name}")]
    UnresolvedLocal { name: String },

    #[error(transparent)]
    Timing(#[from] TimingError),
}

/// Substitutes `$name` tokens using a [`LocalsScope`].
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    scope: LocalsScope<'a>,
    policy: UnresolvedLocals,
}

impl<'a> Resolver<'a> {
    pub fn new(scope: LocalsScope<'a>, policy: UnresolvedLocals) -> Self {
        Self { scope, policy }
    }

    /// Resolve one value.
    ///
    /// A value that consists of a single token takes the local's value as
    /// is, so numeric locals stay numeric. Tokens embedded in longer text
    /// are replaced by the local's textual form.
    pub fn resolve_value(&self, value: &StyleValue) -> Result<StyleValue, ResolveError> {
        let Some(text) = value.as_text() else {
            return Ok(value.clone());
        };
        if !text.contains(VARIABLE_SIGIL) {
            return Ok(value.clone());
        }

        if let Some(name) = whole_token(text) {
            if let Some(local) = self.scope.lookup(name) {
                return Ok(local.clone());
            }
        }

        self.resolve_text(text).map(StyleValue::from)
    }

    /// Resolve every value of `style`.
    pub fn resolve_style(&self, style: &Style) -> Result<Style, ResolveError> {
        let mut resolved = Style::new();
        for (property, value) in style.iter() {
            resolved.insert(property.clone(), self.resolve_value(value)?);
        }
        Ok(resolved)
    }

    /// Replace every token embedded in `text`.
    pub fn resolve_text(&self, text: &str) -> Result<String, ResolveError> {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(pos) = rest.find(VARIABLE_SIGIL) {
            output.push_str(&rest[..pos]);
            let after = &rest[pos + VARIABLE_SIGIL.len_utf8()..];
            let name_len = after
                .find(|c: char| !is_name_char(c))
                .unwrap_or(after.len());
            let name = &after[..name_len];

            if name.is_empty() {
                output.push(VARIABLE_SIGIL);
            } else {
                match self.scope.lookup(name) {
                    Some(local) => output.push_str(&local.to_string()),
                    None => self.unresolved(name, &mut output)?,
                }
            }
            rest = &after[name_len..];
        }
        output.push_str(rest);
        Ok(output)
    }

    fn unresolved(&self, name: &str, output: &mut String) -> Result<(), ResolveError> {
        match self.policy {
            UnresolvedLocals::Error => Err(ResolveError::UnresolvedLocal {
                name: name.to_string(),
            }),
            UnresolvedLocals::Literal => {
                tracing::warn!(param = name, "animation param has no value, keeping token");
                output.push(VARIABLE_SIGIL);
                output.push_str(name);
                Ok(())
            }
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn whole_token(text: &str) -> Option<&str> {
    let name = text.strip_prefix(VARIABLE_SIGIL)?;
    (!name.is_empty() && name.chars().all(is_name_char)).then_some(name)
}

/// True when `text` contains at least one variable token.
pub fn has_tokens(text: &str) -> bool {
    text.split(VARIABLE_SIGIL)
        .skip(1)
        .any(|after| after.starts_with(is_name_char))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Locals;

    fn resolver<'a>(defaults: &'a Locals, overrides: Option<&'a Locals>) -> Resolver<'a> {
        Resolver::new(
            LocalsScope::new(defaults, overrides),
            UnresolvedLocals::Error,
        )
    }

    #[test]
    fn whole_token_keeps_value_type() {
        let defaults = Locals::new().set("w", 42);
        let value = resolver(&defaults, None)
            .resolve_value(&StyleValue::from("$w"))
            .unwrap();
        assert_eq!(value, StyleValue::Number(42.0));
    }

    #[test]
    fn embedded_tokens_are_interpolated() {
        let defaults = Locals::new().set("x", "10px").set("y", 5);
        let text = resolver(&defaults, None)
            .resolve_text("translate($x, $y%)")
            .unwrap();
        assert_eq!(text, "translate(10px, 5%)");
    }

    #[test]
    fn override_beats_default() {
        let defaults = Locals::new().set("$a", "100px").set("$b", "200px");
        let overrides = Locals::new().set("$a", "300px");
        let r = resolver(&defaults, Some(&overrides));

        assert_eq!(
            r.resolve_value(&StyleValue::from("$a")).unwrap(),
            StyleValue::from("300px")
        );
        assert_eq!(
            r.resolve_value(&StyleValue::from("$b")).unwrap(),
            StyleValue::from("200px")
        );
    }

    #[test]
    fn missing_local_is_an_error_by_default() {
        let defaults = Locals::new();
        let err = resolver(&defaults, None)
            .resolve_value(&StyleValue::from("$missing"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnresolvedLocal {
                name: "missing".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Please provide a value for the animation param $missing"
        );
    }

    #[test]
    fn literal_policy_keeps_the_token() {
        let defaults = Locals::new();
        let r = Resolver::new(
            LocalsScope::new(&defaults, None),
            UnresolvedLocals::Literal,
        );
        assert_eq!(
            r.resolve_value(&StyleValue::from("calc($gap * 2)")).unwrap(),
            StyleValue::from("calc($gap * 2)")
        );
    }

    #[test]
    fn lone_sigil_is_not_a_token() {
        let defaults = Locals::new();
        let r = resolver(&defaults, None);
        assert_eq!(r.resolve_text("costs $ 5").unwrap(), "costs $ 5");
        assert!(!has_tokens("costs $ 5"));
        assert!(has_tokens("$dur ease"));
    }

    #[test]
    fn non_text_values_pass_through() {
        let defaults = Locals::new();
        let r = resolver(&defaults, None);
        assert_eq!(
            r.resolve_value(&StyleValue::Number(1.0)).unwrap(),
            StyleValue::Number(1.0)
        );
        assert_eq!(r.resolve_value(&StyleValue::Auto).unwrap(), StyleValue::Auto);
    }
}
