//! Error types for document operations
//!
//! Simple, flat error hierarchy. These are the failures a host document
//! raises when asked to do something it cannot do.

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid node type: expected {expected}, got {actual}")]
    InvalidNodeType { expected: String, actual: String },

    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(String),

    #[error("Node {child} is not a child of node {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Property {0:?} is read-only")]
    ReadOnlyProperty(String),

    #[error("Invalid property {name:?}: {reason}")]
    InvalidProperty { name: String, reason: String },

    #[error("Invalid contentEditable value: {0:?}")]
    InvalidContentEditable(String),

    #[error("Ambient document is already borrowed on this thread")]
    DocumentBusy,
}
