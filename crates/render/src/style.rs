//! Inline style translation
//!
//! Descriptor style keys use `_` where CSS uses `-`. Only the first
//! underscore of each key is converted: `background_color` becomes
//! `background-color`, `border_top_width` becomes `border-top_width`.

use dom::utils::stringify_value;
use indexmap::IndexMap;
use serde_json::Value;

/// Convert a descriptor style key to its CSS property name
pub fn translate_property(name: &str) -> String {
    name.replacen('_', "-", 1)
}

/// One `property: value;` declaration
pub fn declaration(name: &str, value: &Value) -> String {
    format!("{}: {};", translate_property(name), stringify_value(value))
}

/// Style text for a descriptor's `style` map, one declaration per line
pub fn style_text(style: &IndexMap<String, Value>) -> String {
    style
        .iter()
        .map(|(name, value)| declaration(name, value))
        .collect::<Vec<_>>()
        .join("\n")
}
