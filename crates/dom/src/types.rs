//! Core type definitions for the arena document
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Use SmallVec for small arrays (avoid heap allocation)
//! 3. Keep insertion order wherever the DOM exposes it (styles, properties)

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::DomError;

/// Node identifier (index into arena)
/// u32 allows 4 billion nodes, enough for any document
pub type NodeId = u32;

/// Node type matching DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CdataSection = 4,
    EntityReference = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
}

impl NodeType {
    /// Whether nodes of this type may hold children
    pub fn accepts_children(self) -> bool {
        matches!(
            self,
            NodeType::Element | NodeType::Document | NodeType::DocumentFragment
        )
    }
}

/// Editing state of an element (`contentEditable` IDL attribute)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentEditable {
    True,
    False,
    #[default]
    Inherit,
    PlaintextOnly,
}

impl ContentEditable {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentEditable::True => "true",
            ContentEditable::False => "false",
            ContentEditable::Inherit => "inherit",
            ContentEditable::PlaintextOnly => "plaintext-only",
        }
    }
}

impl From<bool> for ContentEditable {
    fn from(value: bool) -> Self {
        if value {
            ContentEditable::True
        } else {
            ContentEditable::False
        }
    }
}

impl FromStr for ContentEditable {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "true" => Ok(ContentEditable::True),
            "false" => Ok(ContentEditable::False),
            "inherit" => Ok(ContentEditable::Inherit),
            "plaintext-only" => Ok(ContentEditable::PlaintextOnly),
            _ => Err(DomError::InvalidContentEditable(s.to_string())),
        }
    }
}

impl fmt::Display for ContentEditable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event delivered to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: String,
    /// Node the event was dispatched on
    pub target: NodeId,
    /// Node whose listener is currently running (differs from `target` while bubbling)
    pub current_target: NodeId,
}

/// Event handler. Listeners are never removed once attached.
pub type EventListener = Rc<dyn Fn(&Event)>;

/// The document tree node structure
///
/// Design philosophy:
/// - Small fixed-size fields first (better packing)
/// - Use indices instead of pointers
/// - Element-only data stays empty on other node types
#[derive(Debug, Clone)]
pub struct DomNode {
    pub node_id: NodeId,
    pub node_type: NodeType,

    // Navigation indices
    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>, // Most nodes have <4 children

    /// Lower-cased tag name for elements, `#text` / `#document` otherwise
    pub node_name: String,
    /// Character data for text and comment nodes
    pub node_value: String,

    // Reflected element state
    pub id: String,
    pub class_name: String,
    pub style: IndexMap<String, String>,
    pub content_editable: ContentEditable,
    pub title: String,
    pub hidden: bool,

    /// Expando properties assigned through `Document::set_property`
    pub properties: IndexMap<String, Value>,
}

impl DomNode {
    /// Create a new node with required fields
    pub fn new(node_id: NodeId, node_type: NodeType, node_name: String) -> Self {
        Self {
            node_id,
            node_type,
            parent_id: None,
            children_ids: SmallVec::new(),
            node_name,
            node_value: String::new(),
            id: String::new(),
            class_name: String::new(),
            style: IndexMap::new(),
            content_editable: ContentEditable::default(),
            title: String::new(),
            hidden: false,
            properties: IndexMap::new(),
        }
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    /// Get an expando property
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Properties that cannot be assigned
pub const READ_ONLY_PROPERTIES: &[&str] = &[
    "tagName",
    "nodeName",
    "nodeType",
    "parentNode",
    "firstChild",
    "children",
    "childNodes",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_editable_parse() {
        assert_eq!("TRUE".parse::<ContentEditable>().unwrap(), ContentEditable::True);
        assert_eq!(
            "plaintext-only".parse::<ContentEditable>().unwrap(),
            ContentEditable::PlaintextOnly
        );
        assert!(matches!(
            "yes".parse::<ContentEditable>(),
            Err(DomError::InvalidContentEditable(_))
        ));
    }

    #[test]
    fn test_content_editable_default_is_inherit() {
        let node = DomNode::new(0, NodeType::Element, "div".to_string());
        assert_eq!(node.content_editable, ContentEditable::Inherit);
        assert_eq!(ContentEditable::from(false).to_string(), "false");
    }

    #[test]
    fn test_children_acceptance() {
        assert!(NodeType::Element.accepts_children());
        assert!(!NodeType::Text.accepts_children());
        assert!(NodeType::DocumentFragment.accepts_children());
        assert_eq!(NodeType::Comment as u8, 8);
    }
}
