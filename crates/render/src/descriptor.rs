//! Element descriptors
//!
//! A render call takes a list of [`Content`]: either a node that already
//! exists, or an [`ElementDescriptor`] saying what to create. Descriptors
//! deserialize from JSON with the script-style field names:
//!
//! ```json
//! {
//!   "type": "div",
//!   "className": "card",
//!   "refName": "card",
//!   "style": { "background_color": "red" },
//!   "children": [{ "type": "span", "textContent": "hi" }]
//! }
//! ```
//!
//! Listeners are closures and can only be attached from Rust.

use dom::{Event, EventListener, NodeId};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

/// One entry of a render list
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ElementDescriptor")]
pub enum Content {
    /// Existing node, appended as-is
    Node(NodeId),
    /// Element to create
    Element(ElementDescriptor),
}

impl From<ElementDescriptor> for Content {
    fn from(descriptor: ElementDescriptor) -> Self {
        Content::Element(descriptor)
    }
}

impl From<NodeId> for Content {
    fn from(node: NodeId) -> Self {
        Content::Node(node)
    }
}

/// Description of an element to create
///
/// Every field is optional; a descriptor without `tag` is reported and
/// skipped at render time.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    #[serde(rename = "type")]
    pub tag: Option<String>,
    /// Scalars are accepted and stringified; falsy values are skipped
    pub text_content: Option<Value>,
    pub children: Option<Vec<Content>>,
    pub style: Option<IndexMap<String, Value>>,
    #[serde(skip)]
    pub listeners: Option<IndexMap<String, EventListener>>,
    /// Coerced by truthiness; absent means `false`
    pub content_editable: Option<Value>,
    pub id: Option<Value>,
    pub class_name: Option<Value>,
    pub ref_name: Option<Value>,
    pub attributes: Option<IndexMap<String, Value>>,
}

impl ElementDescriptor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<Value>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    pub fn child(mut self, child: impl Into<Content>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.children
            .get_or_insert_with(Vec::new)
            .extend(children.into_iter().map(Into::into));
        self
    }

    /// Add a style entry; `name` uses `_` for `-`
    pub fn style(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Attach `listener` for `event_type`
    ///
    /// One listener per event type; a second call for the same type
    /// replaces the first.
    pub fn on(
        mut self,
        event_type: impl Into<String>,
        listener: impl Fn(&Event) + 'static,
    ) -> Self {
        self.listeners
            .get_or_insert_with(IndexMap::new)
            .insert(event_type.into(), Rc::new(listener));
        self
    }

    pub fn editable(mut self, value: impl Into<Value>) -> Self {
        self.content_editable = Some(value.into());
        self
    }

    pub fn id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<Value>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn ref_name(mut self, name: impl Into<Value>) -> Self {
        self.ref_name = Some(name.into());
        self
    }

    /// Property assigned directly onto the created node
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self
            .listeners
            .as_ref()
            .map(|listeners| listeners.keys().collect::<Vec<_>>());

        f.debug_struct("ElementDescriptor")
            .field("tag", &self.tag)
            .field("text_content", &self.text_content)
            .field("children", &self.children)
            .field("style", &self.style)
            .field("listeners", &listeners)
            .field("content_editable", &self.content_editable)
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("ref_name", &self.ref_name)
            .field("attributes", &self.attributes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_descriptor() {
        let contents: Vec<Content> = serde_json::from_value(json!([
            {
                "type": "div",
                "className": "card",
                "refName": "card",
                "contentEditable": 1,
                "style": { "z_index": 2, "background_color": "red" },
                "attributes": { "title": "tip" },
                "children": [{ "type": "span", "textContent": "hi" }, {}]
            }
        ]))
        .unwrap();

        let Content::Element(card) = &contents[0] else {
            panic!("expected an element descriptor");
        };
        assert_eq!(card.tag.as_deref(), Some("div"));
        assert_eq!(card.class_name, Some(json!("card")));
        assert_eq!(card.ref_name, Some(json!("card")));
        assert_eq!(card.content_editable, Some(json!(1)));
        assert!(card.listeners.is_none());

        let style_keys: Vec<_> = card.style.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(style_keys, vec!["z_index", "background_color"]);

        let children = card.children.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        match &children[1] {
            Content::Element(untyped) => assert!(untyped.tag.is_none()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_scalar_fields() {
        let contents: Vec<Content> = serde_json::from_value(json!([
            { "type": "li", "id": 5, "className": true, "textContent": 0, "refName": 7 }
        ]))
        .unwrap();

        let Content::Element(item) = &contents[0] else {
            panic!("expected an element descriptor");
        };
        assert_eq!(item.id, Some(json!(5)));
        assert_eq!(item.class_name, Some(json!(true)));
        assert_eq!(item.text_content, Some(json!(0)));
        assert_eq!(item.ref_name, Some(json!(7)));
    }

    #[test]
    fn test_builder_methods() {
        let descriptor = ElementDescriptor::new("button")
            .text("Save")
            .id("save")
            .class("primary")
            .ref_name("save")
            .style("font_size", "12px")
            .attribute("title", "Save it")
            .editable(false)
            .on("click", |_| {})
            .child(Content::Node(7))
            .children([ElementDescriptor::new("i"), ElementDescriptor::new("b")]);

        assert_eq!(descriptor.tag.as_deref(), Some("button"));
        assert_eq!(descriptor.text_content, Some(json!("Save")));
        assert_eq!(descriptor.children.as_ref().map(Vec::len), Some(3));
        assert!(matches!(descriptor.children.as_ref().unwrap()[0], Content::Node(7)));
        assert_eq!(descriptor.listeners.as_ref().map(IndexMap::len), Some(1));

        let debug = format!("{:?}", descriptor);
        assert!(debug.contains("\"click\""));
    }
}
