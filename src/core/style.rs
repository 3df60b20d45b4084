//! Style snapshots: property maps attached to states and animation steps.
//!
//! A `Style` is an ordered map of property name to `StyleValue`. Values are
//! plain data; variable tokens (`$name`) are kept verbatim until a
//! transition is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Token standing for "compute this value at playback time".
pub const AUTO_STYLE: &str = "*";

/// A single style property value.
///
/// Serializes as a bare number or string; the auto value is written as `"*"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStyleValue", into = "RawStyleValue")]
pub enum StyleValue {
    /// Unitless numeric value, e.g. `opacity: 0.5` or `width: 50`.
    Number(f64),
    /// Any textual value, e.g. `"100px"` or `"translateX($x)"`.
    Text(String),
    /// The auto value `*`, filled in from the element when possible.
    Auto,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawStyleValue {
    Number(f64),
    Text(String),
}

impl From<RawStyleValue> for StyleValue {
    fn from(raw: RawStyleValue) -> Self {
        match raw {
            RawStyleValue::Number(n) => Self::Number(n),
            RawStyleValue::Text(text) => Self::from(text),
        }
    }
}

impl From<StyleValue> for RawStyleValue {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Number(n) => Self::Number(n),
            StyleValue::Text(text) => Self::Text(text),
            StyleValue::Auto => Self::Text(AUTO_STYLE.to_string()),
        }
    }
}

impl StyleValue {
    /// Whether this is the auto value `*`.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Text content of the value, if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::Auto => f.write_str(AUTO_STYLE),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        if value == AUTO_STYLE {
            Self::Auto
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        if value == AUTO_STYLE {
            Self::Auto
        } else {
            Self::Text(value)
        }
    }
}

/// Ordered mapping of property name to value.
///
/// # Example
///
/// ```rust
/// use segue::core::{Style, StyleValue};
///
/// let style = Style::new().set("width", 50).set("height", "100px");
///
/// assert_eq!(style.get("width"), Some(&StyleValue::Number(50.0)));
/// assert_eq!(style.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    properties: BTreeMap<String, StyleValue>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this style with `property` set to `value`.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set `property` to `value` in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Whether `property` is set.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over properties and values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.properties.iter()
    }

    /// Iterate over property names in order.
    pub fn properties(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    /// Overlay `other` on top of this style; properties in `other` win.
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Like [`Style::merge`], but returns a new style.
    pub fn merged(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Style
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
