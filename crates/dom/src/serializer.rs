//! HTML Serializer - Convert a subtree back to markup
//!
//! Only reflected state is written out (id, class, style, contenteditable,
//! title, hidden). Expando properties are not attributes and are skipped.

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::*;
use crate::utils::{escape_html, serialize_style};

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// One node per line, indented by depth
    pub pretty: bool,
    pub indent: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

/// Subtree to HTML serializer
#[derive(Debug, Default)]
pub struct HtmlSerializer {
    config: SerializerConfig,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Markup of the node itself and everything below it
    pub fn outer_html(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        self.serialize_node(arena, node_id, 0, &mut output)?;
        Ok(self.finish(output))
    }

    /// Markup of the node's children only
    pub fn inner_html(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut output = String::with_capacity(256);
        for &child_id in &arena.get(node_id)?.children_ids {
            self.serialize_node(arena, child_id, 0, &mut output)?;
        }
        Ok(self.finish(output))
    }

    fn finish(&self, mut output: String) -> String {
        if self.config.pretty {
            let trimmed = output.trim_end().len();
            output.truncate(trimmed);
        }
        output
    }

    fn open_line(&self, depth: usize, output: &mut String) {
        if self.config.pretty {
            output.push_str(&" ".repeat(depth * self.config.indent));
        }
    }

    fn close_line(&self, output: &mut String) {
        if self.config.pretty {
            output.push('\n');
        }
    }

    /// Serialize a single node recursively
    fn serialize_node(
        &self,
        arena: &DomArena,
        node_id: NodeId,
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        let node = arena.get(node_id)?;

        match node.node_type {
            NodeType::Element => {
                self.open_line(depth, output);
                output.push('<');
                output.push_str(&node.node_name);
                push_attributes(node, output);
                output.push('>');

                if VOID_ELEMENTS.contains(&node.node_name.as_str()) {
                    self.close_line(output);
                    return Ok(());
                }

                if !node.children_ids.is_empty() {
                    self.close_line(output);
                    for &child_id in &node.children_ids {
                        self.serialize_node(arena, child_id, depth + 1, output)?;
                    }
                    self.open_line(depth, output);
                }

                output.push_str("</");
                output.push_str(&node.node_name);
                output.push('>');
                self.close_line(output);
            }
            NodeType::Text => {
                self.open_line(depth, output);
                output.push_str(&escape_html(&node.node_value, false));
                self.close_line(output);
            }
            NodeType::Comment => {
                self.open_line(depth, output);
                output.push_str("<!--");
                output.push_str(&node.node_value);
                output.push_str("-->");
                self.close_line(output);
            }
            NodeType::Document | NodeType::DocumentFragment => {
                // Containers are transparent
                for &child_id in &node.children_ids {
                    self.serialize_node(arena, child_id, depth, output)?;
                }
            }
            _ => {}
        }

        Ok(())
    }
}

fn push_attribute(name: &str, value: &str, output: &mut String) {
    output.push(' ');
    output.push_str(name);
    output.push_str("=\"");
    output.push_str(&escape_html(value, true));
    output.push('"');
}

fn push_attributes(node: &DomNode, output: &mut String) {
    if !node.id.is_empty() {
        push_attribute("id", &node.id, output);
    }
    if !node.class_name.is_empty() {
        push_attribute("class", &node.class_name, output);
    }
    if !node.style.is_empty() {
        push_attribute("style", &serialize_style(&node.style), output);
    }
    if node.content_editable != ContentEditable::Inherit {
        push_attribute("contenteditable", node.content_editable.as_str(), output);
    }
    if !node.title.is_empty() {
        push_attribute("title", &node.title, output);
    }
    if node.hidden {
        output.push_str(" hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn sample() -> (Document, NodeId) {
        let mut doc = Document::new();
        let list = doc.create_element("ul").unwrap();
        doc.set_id(list, "items").unwrap();
        doc.set_class_name(list, "a b").unwrap();
        doc.set_content_editable(list, ContentEditable::False).unwrap();
        for label in ["one", "<two>"] {
            let item = doc.create_element("li").unwrap();
            doc.set_text_content(item, label).unwrap();
            doc.append_child(list, item).unwrap();
        }
        let br = doc.create_element("br").unwrap();
        doc.append_child(list, br).unwrap();
        (doc, list)
    }

    #[test]
    fn test_serialize_compact() {
        let (doc, list) = sample();
        let html = HtmlSerializer::new().outer_html(doc.arena(), list).unwrap();

        assert_eq!(
            html,
            "<ul id=\"items\" class=\"a b\" contenteditable=\"false\">\
             <li>one</li><li>&lt;two&gt;</li><br></ul>"
        );
    }

    #[test]
    fn test_serialize_pretty() {
        let (doc, list) = sample();
        let serializer = HtmlSerializer::with_config(SerializerConfig {
            pretty: true,
            indent: 2,
        });
        let html = serializer.inner_html(doc.arena(), list).unwrap();

        assert_eq!(html, "<li>\n  one\n</li>\n<li>\n  &lt;two&gt;\n</li>\n<br>");
    }

    #[test]
    fn test_serialize_style_and_hidden() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        doc.set_style_text(div, "color: red;").unwrap();
        doc.set_property(div, "hidden", serde_json::json!(true)).unwrap();

        assert_eq!(
            doc.outer_html(div).unwrap(),
            "<div style=\"color: red;\" hidden></div>"
        );
    }
}
