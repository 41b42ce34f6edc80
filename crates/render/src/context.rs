//! Document context capability
//!
//! Everything the builder needs from a host document. [`dom::Document`]
//! is the in-tree implementation; other hosts plug in by implementing
//! this trait.

use dom::{ContentEditable, Document, EventListener, NodeId, Result};
use serde_json::Value;

pub trait DocumentContext {
    /// Create an unattached element
    fn create_element(&mut self, tag: &str) -> Result<NodeId>;

    fn first_child(&self, node: NodeId) -> Result<Option<NodeId>>;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Replace the inline style with `text`
    fn set_style_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    fn set_id(&mut self, node: NodeId, id: &str) -> Result<()>;

    fn set_class_name(&mut self, node: NodeId, class_name: &str) -> Result<()>;

    fn set_content_editable(&mut self, node: NodeId, editable: bool) -> Result<()>;

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        listener: EventListener,
    ) -> Result<()>;

    /// Assign an arbitrary property by name
    fn set_property(&mut self, node: NodeId, name: &str, value: Value) -> Result<()>;
}

impl DocumentContext for Document {
    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        Document::create_element(self, tag)
    }

    fn first_child(&self, node: NodeId) -> Result<Option<NodeId>> {
        Document::first_child(self, node)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        Document::append_child(self, parent, child)
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        Document::remove_child(self, parent, child)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()> {
        Document::set_text_content(self, node, text)
    }

    fn set_style_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        Document::set_style_text(self, node, text)
    }

    fn set_id(&mut self, node: NodeId, id: &str) -> Result<()> {
        Document::set_id(self, node, id)
    }

    fn set_class_name(&mut self, node: NodeId, class_name: &str) -> Result<()> {
        Document::set_class_name(self, node, class_name)
    }

    fn set_content_editable(&mut self, node: NodeId, editable: bool) -> Result<()> {
        Document::set_content_editable(self, node, ContentEditable::from(editable))
    }

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        listener: EventListener,
    ) -> Result<()> {
        Document::add_event_listener(self, node, event_type, listener)
    }

    fn set_property(&mut self, node: NodeId, name: &str, value: Value) -> Result<()> {
        Document::set_property(self, node, name, value)
    }
}
