#![forbid(unsafe_code)]

//! Inline styles and class names for elements the front-end creates.
//!
//! Kept free of JS types so the exact declarations are testable natively.

use hue_core::Swatch;

/// Class carried by every swatch element.
pub const SWATCH_CLASS: &str = "color-box";
/// Attribute holding a swatch's color for delegated click handling.
pub const SWATCH_HEX_ATTR: &str = "data-hex";
/// Attribute naming the theme a toggle selects.
pub const THEME_ATTR: &str = "data-theme";

/// A CSS property/value pair applied with `style.setProperty`.
pub type Declaration = (&'static str, String);

#[must_use]
pub fn swatch_declarations(swatch: &Swatch) -> Vec<Declaration> {
    vec![
        ("background", swatch.hex.clone()),
        ("color", swatch.text_color.as_hex().to_string()),
    ]
}

#[must_use]
pub fn error_declarations() -> Vec<Declaration> {
    vec![
        ("color", "red".to_string()),
        ("padding", "10px".to_string()),
        ("margin-top", "10px".to_string()),
    ]
}

#[must_use]
pub fn notification_declarations() -> Vec<Declaration> {
    vec![
        ("position", "fixed".to_string()),
        ("top", "10px".to_string()),
        ("right", "10px".to_string()),
        ("background", "#4CAF50".to_string()),
        ("color", "white".to_string()),
        ("padding", "12px 20px".to_string()),
        ("border-radius", "4px".to_string()),
        ("z-index", "1000".to_string()),
    ]
}

/// Selector matching every theme toggle.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}
