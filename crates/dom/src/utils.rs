//! Utility functions for document processing

use indexmap::IndexMap;
use serde_json::Value;

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::{NodeId, NodeType};

/// Check whether `tag` is acceptable as an element name
///
/// Must start with an ASCII letter and contain no whitespace or markup
/// delimiters. Custom element names (`my-widget`) are fine.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '=' | '"' | '\'' | '\0'))
}

/// Parse inline style text into ordered declarations
///
/// Declarations are separated by `;` outside quoted strings and
/// parentheses. Malformed declarations (no `:`, empty name or empty value)
/// are dropped, the way a browser's CSS parser ignores them. Later
/// duplicates replace earlier values. Names are lower-cased except custom
/// properties (`--name`), which are case-sensitive.
pub fn parse_style_text(text: &str) -> IndexMap<String, String> {
    let mut declarations = IndexMap::new();

    for declaration in split_declarations(text) {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        let name = if name.starts_with("--") {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };
        declarations.insert(name, value.to_string());
    }

    declarations
}

/// Split on top-level `;`, skipping those inside quotes or parentheses
fn split_declarations(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                parts.push(&text[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);

    parts
}

/// Serialize declarations back to `cssText` form: `a: b; c: d;`
pub fn serialize_style(declarations: &IndexMap<String, String>) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Get all text content from node and its descendants
pub fn get_text_content(arena: &DomArena, node_id: NodeId) -> Result<String> {
    let mut text = String::new();

    arena.traverse_df(node_id, |node| {
        if node.node_type == NodeType::Text {
            text.push_str(&node.node_value);
        }
        Ok(())
    })?;

    Ok(text)
}

/// Script-style truthiness of a JSON value
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy. Arrays and objects are
/// truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Script-style string conversion of a JSON value
///
/// Strings are taken verbatim (no quotes), arrays join their elements
/// with `,`, objects become `[object Object]`.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Escape text for HTML output
pub fn escape_html(text: &str, in_attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if in_attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert!(is_valid_tag_name("div"));
        assert!(is_valid_tag_name("my-widget"));
        assert!(is_valid_tag_name("H1"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("1div"));
        assert!(!is_valid_tag_name("di v"));
        assert!(!is_valid_tag_name("<div>"));
    }

    #[test]
    fn test_parse_style_text() {
        let parsed = parse_style_text("background-color: red;\nwidth: 10px;\nbroken;\n: x;");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("background-color").map(String::as_str), Some("red"));
        assert_eq!(parsed.get("width").map(String::as_str), Some("10px"));
        assert_eq!(serialize_style(&parsed), "background-color: red; width: 10px;");
    }

    #[test]
    fn test_parse_style_keeps_colons_in_values() {
        let parsed = parse_style_text("background: url(http://x/y.png)");
        assert_eq!(
            parsed.get("background").map(String::as_str),
            Some("url(http://x/y.png)")
        );
    }

    #[test]
    fn test_parse_style_semicolons_in_quotes_and_parens() {
        let parsed = parse_style_text(
            "content: \"a;b\";\nfont-family: 'x;y', serif;\nbackground: url(data:image/png;base64,AA);",
        );
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.get("content").map(String::as_str), Some("\"a;b\""));
        assert_eq!(
            parsed.get("font-family").map(String::as_str),
            Some("'x;y', serif")
        );
        assert_eq!(
            parsed.get("background").map(String::as_str),
            Some("url(data:image/png;base64,AA)")
        );
    }

    #[test]
    fn test_parse_style_escaped_quote() {
        let parsed = parse_style_text(r#"content: "a\";b"; color: red"#);
        assert_eq!(parsed.get("content").map(String::as_str), Some(r#""a\";b""#));
        assert_eq!(parsed.get("color").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_parse_style_custom_property_case() {
        let parsed = parse_style_text("--Accent-Color: red;\nCOLOR: var(--Accent-Color);");
        assert_eq!(parsed.get("--Accent-Color").map(String::as_str), Some("red"));
        assert_eq!(
            parsed.get("color").map(String::as_str),
            Some("var(--Accent-Color)")
        );
        assert!(parsed.get("--accent-color").is_none());
    }

    #[test]
    fn test_truthiness() {
        use serde_json::json;

        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
        }
        for truthy in [json!(true), json!(1), json!("false"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
        }
    }

    #[test]
    fn test_stringify_value() {
        use serde_json::json;

        assert_eq!(stringify_value(&json!("red")), "red");
        assert_eq!(stringify_value(&json!(10)), "10");
        assert_eq!(stringify_value(&json!(true)), "true");
        assert_eq!(stringify_value(&json!(null)), "null");
        assert_eq!(stringify_value(&json!([1, null, "a"])), "1,,a");
        assert_eq!(stringify_value(&json!({"k": 1})), "[object Object]");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\"", false), "a &lt; b &amp; \"c\"");
        assert_eq!(escape_html("\"q\"", true), "&quot;q&quot;");
    }
}
