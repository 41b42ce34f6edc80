//! Document - Main entry point for tree operations
//!
//! This handles:
//! - Node creation (elements, text)
//! - Child list mutation with DOM hierarchy rules
//! - Reflected element properties and expando properties
//! - Inline style text
//! - Event listener registration and bubbling dispatch

use ahash::AHashMap;
use serde_json::Value;
use std::fmt;

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::serializer::HtmlSerializer;
use crate::types::*;
use crate::utils;

/// An arena-backed document
///
/// Every node created through a document lives in its arena until the
/// document is dropped; `NodeId`s are only meaningful for the document
/// that issued them.
pub struct Document {
    arena: DomArena,
    root: NodeId,
    listeners: AHashMap<NodeId, Vec<(String, EventListener)>>,
}

impl Document {
    /// Create an empty document holding only its `#document` root
    pub fn new() -> Self {
        let mut arena = DomArena::new();
        let root = arena.add_node(DomNode::new(
            0,
            NodeType::Document,
            "#document".to_string(),
        ));

        Self {
            arena,
            root,
            listeners: AHashMap::new(),
        }
    }

    /// The `#document` node
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.arena.get(node_id)
    }

    fn element_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        let node = self.arena.get_mut(node_id)?;
        if node.node_type != NodeType::Element {
            return Err(DomError::InvalidNodeType {
                expected: "Element".to_string(),
                actual: format!("{:?}", node.node_type),
            });
        }
        Ok(node)
    }

    /// Create an unattached element
    ///
    /// Tag names are stored lower-cased.
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        if !utils::is_valid_tag_name(tag) {
            return Err(DomError::InvalidTagName(tag.to_string()));
        }

        let node = DomNode::new(0, NodeType::Element, tag.to_ascii_lowercase());
        Ok(self.arena.add_node(node))
    }

    /// Create an unattached text node
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        let mut node = DomNode::new(0, NodeType::Text, "#text".to_string());
        node.node_value = text.to_string();
        self.arena.add_node(node)
    }

    pub fn first_child(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.arena.get(node_id)?.children_ids.first().copied())
    }

    pub fn child_ids(&self, node_id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.arena.get(node_id)?.children_ids.to_vec())
    }

    pub fn parent(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.arena.get(node_id)?.parent_id)
    }

    /// Append `child` as the last child of `parent`
    ///
    /// A child that already has a parent is moved, like `appendChild`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_type = self.arena.get(parent)?.node_type;
        let (child_type, old_parent) = {
            let node = self.arena.get(child)?;
            (node.node_type, node.parent_id)
        };

        if !parent_type.accepts_children() {
            return Err(DomError::HierarchyRequest(format!(
                "{:?} node {} cannot have children",
                parent_type, parent
            )));
        }
        if child_type == NodeType::Document {
            return Err(DomError::HierarchyRequest(
                "a document cannot be inserted as a child".to_string(),
            ));
        }
        if self.arena.is_inclusive_ancestor(child, parent)? {
            return Err(DomError::HierarchyRequest(format!(
                "node {} cannot be inserted into itself or its descendant {}",
                child, parent
            )));
        }

        if let Some(old_parent) = old_parent {
            self.remove_child(old_parent, child)?;
        }

        self.arena.get_mut(parent)?.children_ids.push(child);
        self.arena.get_mut(child)?.parent_id = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent`
    ///
    /// The node stays in the arena and can be appended again.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.arena.get(child)?.parent_id != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }

        let parent_node = self.arena.get_mut(parent)?;
        let position = parent_node
            .children_ids
            .iter()
            .position(|&id| id == child)
            .ok_or(DomError::NotAChild { parent, child })?;
        parent_node.children_ids.remove(position);

        self.arena.get_mut(child)?.parent_id = None;
        Ok(())
    }

    /// Replace the content of a node with text
    ///
    /// On elements every child is detached and, for non-empty `text`, one
    /// text node is appended. On text nodes the character data is replaced.
    pub fn set_text_content(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        let node = self.arena.get_mut(node_id)?;
        if matches!(node.node_type, NodeType::Text | NodeType::Comment) {
            node.node_value = text.to_string();
            return Ok(());
        }

        while let Some(child) = self.first_child(node_id)? {
            self.remove_child(node_id, child)?;
        }
        if !text.is_empty() {
            let text_node = self.create_text_node(text);
            self.append_child(node_id, text_node)?;
        }
        Ok(())
    }

    /// Concatenated text of the node and its descendants
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        utils::get_text_content(&self.arena, node_id)
    }

    pub fn set_id(&mut self, node_id: NodeId, id: &str) -> Result<()> {
        self.element_mut(node_id)?.id = id.to_string();
        Ok(())
    }

    pub fn set_class_name(&mut self, node_id: NodeId, class_name: &str) -> Result<()> {
        self.element_mut(node_id)?.class_name = class_name.to_string();
        Ok(())
    }

    /// Replace the inline style with the declarations parsed from `text`
    pub fn set_style_text(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        self.element_mut(node_id)?.style = utils::parse_style_text(text);
        Ok(())
    }

    /// Serialized inline style (`cssText`)
    pub fn css_text(&self, node_id: NodeId) -> Result<String> {
        Ok(utils::serialize_style(&self.arena.get(node_id)?.style))
    }

    pub fn style_property(&self, node_id: NodeId, name: &str) -> Result<Option<String>> {
        Ok(self.arena.get(node_id)?.style.get(name).cloned())
    }

    pub fn set_content_editable(&mut self, node_id: NodeId, value: ContentEditable) -> Result<()> {
        self.element_mut(node_id)?.content_editable = value;
        Ok(())
    }

    pub fn content_editable(&self, node_id: NodeId) -> Result<ContentEditable> {
        Ok(self.arena.get(node_id)?.content_editable)
    }

    /// Assign a property by its script name
    ///
    /// Reflected names update the matching node state, read-only names
    /// fail, anything else is kept as an expando property.
    pub fn set_property(&mut self, node_id: NodeId, name: &str, value: Value) -> Result<()> {
        if name.is_empty() {
            return Err(DomError::InvalidProperty {
                name: name.to_string(),
                reason: "property name is empty".to_string(),
            });
        }
        if READ_ONLY_PROPERTIES.contains(&name) {
            return Err(DomError::ReadOnlyProperty(name.to_string()));
        }

        match name {
            "id" => self.set_id(node_id, &utils::stringify_value(&value)),
            "className" => self.set_class_name(node_id, &utils::stringify_value(&value)),
            "textContent" => {
                let text = match value {
                    Value::Null => String::new(),
                    other => utils::stringify_value(&other),
                };
                self.set_text_content(node_id, &text)
            }
            "contentEditable" => {
                let editable = match value {
                    Value::Bool(flag) => ContentEditable::from(flag),
                    other => utils::stringify_value(&other).parse()?,
                };
                self.set_content_editable(node_id, editable)
            }
            "style" => self.set_style_text(node_id, &utils::stringify_value(&value)),
            "title" => {
                self.element_mut(node_id)?.title = utils::stringify_value(&value);
                Ok(())
            }
            "hidden" => {
                self.element_mut(node_id)?.hidden = utils::is_truthy(&value);
                Ok(())
            }
            _ => {
                self.arena
                    .get_mut(node_id)?
                    .properties
                    .insert(name.to_string(), value);
                Ok(())
            }
        }
    }

    /// Read a property by its script name
    pub fn property(&self, node_id: NodeId, name: &str) -> Result<Option<Value>> {
        let node = self.arena.get(node_id)?;
        let value = match name {
            "id" => Some(Value::from(node.id.clone())),
            "className" => Some(Value::from(node.class_name.clone())),
            "textContent" => Some(Value::from(self.text_content(node_id)?)),
            "contentEditable" => Some(Value::from(node.content_editable.as_str())),
            "style" => Some(Value::from(utils::serialize_style(&node.style))),
            "title" => Some(Value::from(node.title.clone())),
            "hidden" => Some(Value::from(node.hidden)),
            "tagName" => node.tag_name().map(|tag| Value::from(tag.to_ascii_uppercase())),
            "nodeName" => Some(Value::from(node.node_name.clone())),
            "nodeType" => Some(Value::from(node.node_type as u8)),
            _ => node.property(name).cloned(),
        };
        Ok(value)
    }

    /// Subscribe `listener` to `event_type` events reaching `node_id`
    pub fn add_event_listener(
        &mut self,
        node_id: NodeId,
        event_type: &str,
        listener: EventListener,
    ) -> Result<()> {
        self.arena.get(node_id)?;
        self.listeners
            .entry(node_id)
            .or_default()
            .push((event_type.to_string(), listener));
        Ok(())
    }

    pub fn listener_count(&self, node_id: NodeId, event_type: &str) -> usize {
        self.listeners.get(&node_id).map_or(0, |listeners| {
            listeners.iter().filter(|(ty, _)| ty == event_type).count()
        })
    }

    /// Fire an event at `target` and bubble it to the root
    ///
    /// Returns the number of listener invocations.
    pub fn dispatch_event(&self, target: NodeId, event_type: &str) -> Result<usize> {
        let mut path = vec![target];
        let mut current = self.arena.get(target)?.parent_id;
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.arena.get(node_id)?.parent_id;
        }

        let mut invoked = 0;
        for current_target in path {
            let Some(listeners) = self.listeners.get(&current_target) else {
                continue;
            };
            let event = Event {
                event_type: event_type.to_string(),
                target,
                current_target,
            };
            for (_, listener) in listeners.iter().filter(|(ty, _)| ty == event_type) {
                listener(&event);
                invoked += 1;
            }
        }

        Ok(invoked)
    }

    /// HTML of the node itself and its subtree
    pub fn outer_html(&self, node_id: NodeId) -> Result<String> {
        HtmlSerializer::new().outer_html(&self.arena, node_id)
    }

    /// HTML of the node's children
    pub fn inner_html(&self, node_id: NodeId) -> Result<String> {
        HtmlSerializer::new().inner_html(&self.arena, node_id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("nodes", &self.arena.len())
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
