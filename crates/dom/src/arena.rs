//! Arena-based document tree storage
//!
//! "Bad programmers worry about the code. Good programmers worry about
//! data structures and their relationships."
//!
//! The arena owns every node a document ever created. Detached nodes stay
//! in the arena (a removed child can be appended again later), so a
//! `NodeId` stays valid for the lifetime of its document.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena: Vec<DomNode>
//!        [Node0][Node1][Node2]...
//!         ↑ 4-byte index, not 8-byte pointer
//! ```

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId};

/// Arena allocator for document nodes
///
/// Design:
/// - Single Vec<DomNode> for sequential allocation
/// - No Rc/Arc: use indices everywhere
#[derive(Debug)]
pub struct DomArena {
    nodes: Vec<DomNode>,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Add a node to the arena, returns its ID
    ///
    /// The node's own `node_id` is overwritten with its arena slot.
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        self.nodes.push(node);
        node_id
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Total number of nodes, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node_id` is `ancestor_id` or lies below it
    pub fn is_inclusive_ancestor(&self, ancestor_id: NodeId, node_id: NodeId) -> Result<bool> {
        let mut current = Some(node_id);
        while let Some(id) = current {
            if id == ancestor_id {
                return Ok(true);
            }
            current = self.get(id)?.parent_id;
        }
        Ok(false)
    }

    /// Traverse tree depth-first (iterative, no recursion)
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeType;

    fn element(tag: &str) -> DomNode {
        DomNode::new(0, NodeType::Element, tag.to_string())
    }

    #[test]
    fn test_arena_basic() {
        let mut arena = DomArena::new();
        assert!(arena.is_empty());

        let first = arena.add_node(element("div"));
        let second = arena.add_node(element("span"));
        assert_eq!(first, 0);
        assert_eq!(second, 1);

        let retrieved = arena.get(second).unwrap();
        assert_eq!(retrieved.node_name, "span");
        assert_eq!(retrieved.node_id, 1);
        assert_eq!(arena.len(), 2);
        assert!(matches!(arena.get(7), Err(DomError::NodeNotFound(7))));
    }

    #[test]
    fn test_traverse_df() {
        let mut arena = DomArena::new();

        // Create tree: root -> [child1 -> [grandchild], child2]
        let root_id = arena.add_node(element("div"));
        let child1 = arena.add_node(element("section"));
        let grandchild = arena.add_node(element("em"));
        let child2 = arena.add_node(element("span"));

        arena.get_mut(root_id).unwrap().children_ids.extend([child1, child2]);
        arena.get_mut(child1).unwrap().children_ids.push(grandchild);

        let mut visited = Vec::new();
        arena
            .traverse_df(root_id, |node| {
                visited.push(node.node_name.clone());
                Ok(())
            })
            .unwrap();
        assert_eq!(visited, vec!["div", "section", "em", "span"]);
    }

    #[test]
    fn test_inclusive_ancestor() {
        let mut arena = DomArena::new();
        let root_id = arena.add_node(element("div"));
        let child = arena.add_node(element("p"));
        arena.get_mut(root_id).unwrap().children_ids.push(child);
        arena.get_mut(child).unwrap().parent_id = Some(root_id);

        assert!(arena.is_inclusive_ancestor(root_id, child).unwrap());
        assert!(arena.is_inclusive_ancestor(child, child).unwrap());
        assert!(!arena.is_inclusive_ancestor(child, root_id).unwrap());
        assert!(matches!(
            arena.is_inclusive_ancestor(root_id, 9),
            Err(DomError::NodeNotFound(9))
        ));
    }

}
