//! Macros for ergonomic style construction.

/// Build a [`Style`](crate::core::Style) from `property => value` pairs.
///
/// Values may be numbers or strings; `"*"` becomes the auto value.
///
/// # Example
///
/// ```
/// use segue::style;
/// use segue::core::StyleValue;
///
/// let style = style! {
///     "width" => 50,
///     "height" => "$h",
///     "opacity" => 0.5,
/// };
///
/// assert_eq!(style.get("width"), Some(&StyleValue::Number(50.0)));
/// assert_eq!(style.len(), 3);
/// ```
#[macro_export]
macro_rules! style {
    () => {
        $crate::core::Style::new()
    };
    ($($property:expr => $value:expr),+ $(,)?) => {{
        let mut style = $crate::core::Style::new();
        $(
            style.insert($property, $value);
        )+
        style
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StyleValue;

    #[test]
    fn style_macro_builds_style() {
        let style = style! {
            "width" => 50,
            "color" => "red",
        };

        assert_eq!(style.get("width"), Some(&StyleValue::Number(50.0)));
        assert_eq!(style.get("color"), Some(&StyleValue::from("red")));
    }

    #[test]
    fn style_macro_supports_empty_and_auto() {
        let empty = style! {};
        assert!(empty.is_empty());

        let auto = style! { "height" => "*" };
        assert_eq!(auto.get("height"), Some(&StyleValue::Auto));
    }

    #[test]
    fn later_entries_win() {
        let style = style! { "width" => 1, "width" => 2 };
        assert_eq!(style.get("width"), Some(&StyleValue::Number(2.0)));
    }
}
