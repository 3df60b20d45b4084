//! Element context consulted while building timelines.

use crate::core::{Style, StyleValue};

/// Read-only view of the element being animated.
///
/// The builder asks it for computed values of properties whose keyframe
/// value is the auto value `*`. Implementations must not mutate the
/// element.
pub trait ElementContext {
    /// Current computed value of `property`, if known.
    fn computed_style(&self, property: &str) -> Option<StyleValue>;
}

/// No element information; auto values stay `*`.
impl ElementContext for () {
    fn computed_style(&self, _property: &str) -> Option<StyleValue> {
        None
    }
}

/// A style snapshot can stand in for an element's computed styles.
impl ElementContext for Style {
    fn computed_style(&self, property: &str) -> Option<StyleValue> {
        self.get(property).filter(|v| !v.is_auto()).cloned()
    }
}

impl<E: ElementContext + ?Sized> ElementContext for &E {
    fn computed_style(&self, property: &str) -> Option<StyleValue> {
        (**self).computed_style(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_element_knows_nothing() {
        assert_eq!(().computed_style("width"), None);
    }

    #[test]
    fn style_element_reports_concrete_values_only() {
        let element = Style::new().set("width", "120px").set("height", "*");
        assert_eq!(
            element.computed_style("width"),
            Some(StyleValue::from("120px"))
        );
        assert_eq!(element.computed_style("height"), None);
        assert_eq!(element.computed_style("opacity"), None);
    }
}
