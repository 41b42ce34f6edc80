//! Reference mapping returned by a render call

use ahash::AHashMap;
use dom::NodeId;
use std::ops::Index;

/// Named references to nodes created during one render call
///
/// Flat across nesting levels. Inserting or merging a name that is
/// already present replaces the earlier node.
#[derive(Debug, Clone, Default)]
pub struct Refs {
    nodes: AHashMap<String, NodeId>,
}

impl Refs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` under `name`, returning the node it replaced
    pub fn insert(&mut self, name: impl Into<String>, node: NodeId) -> Option<NodeId> {
        self.nodes.insert(name.into(), node)
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Merge `other` into `self`; entries of `other` win on collision
    pub fn merge(&mut self, other: Refs) {
        self.nodes.extend(other.nodes);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.nodes.iter().map(|(name, &node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}

impl Index<&str> for Refs {
    type Output = NodeId;

    /// Panics if `name` was never recorded
    fn index(&self, name: &str) -> &NodeId {
        &self.nodes[name]
    }
}

impl IntoIterator for Refs {
    type Item = (String, NodeId);
    type IntoIter = std::collections::hash_map::IntoIter<String, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl FromIterator<(String, NodeId)> for Refs {
    fn from_iter<I: IntoIterator<Item = (String, NodeId)>>(iter: I) -> Self {
        let mut refs = Refs::new();
        for (name, node) in iter {
            refs.insert(name, node);
        }
        refs
    }
}
