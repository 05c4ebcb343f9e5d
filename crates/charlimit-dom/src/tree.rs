//! DOM Tree (arena-based allocation)
//!
//! Nodes live in a flat Vec and refer to each other by NodeId. Detached
//! nodes keep their arena slot; reachability from the root decides
//! whether a node is in the document.

use crate::{DomEvent, Node, NodeId};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node not found")]
    NotFound,
    /// Operation requires an element node
    #[error("node is not an element")]
    NotAnElement,
    /// Node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    events: Vec<DomEvent>,
}

impl DomTree {
    /// Create a new tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            events: Vec::new(),
        }
    }

    /// Root node ID
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }

        let prev_last = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        {
            let child_node = self.get_mut(child).ok_or(DomError::NotFound)?;
            child_node.parent = parent;
            child_node.prev_sibling = prev_last;
            child_node.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            if let Some(prev) = self.get_mut(prev_last) {
                prev.next_sibling = child;
            }
        }
        {
            let parent_node = self.get_mut(parent).ok_or(DomError::NotFound)?;
            if !parent_node.first_child.is_valid() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }

        Ok(child)
    }

    /// Remove a child node, detaching its whole subtree
    ///
    /// Queues a NodeRemoved event for every element in the subtree so
    /// consumers can drop per-element state.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let child_node = self.get(child).ok_or(DomError::NotFound)?;
        if child_node.parent != parent {
            return Err(DomError::NotAChild);
        }
        let prev = child_node.prev_sibling;
        let next = child_node.next_sibling;

        if self.get(child).map(|n| n.is_element()).unwrap_or(false) {
            self.events.push(DomEvent::node_removed(child));
        }
        for id in self.descendants(child) {
            if self.get(id).map(|n| n.is_element()).unwrap_or(false) {
                self.events.push(DomEvent::node_removed(id));
            }
        }

        if prev.is_valid() {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = next;
            }
        }
        if next.is_valid() {
            if let Some(node) = self.get_mut(next) {
                node.prev_sibling = prev;
            }
        }
        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child == child {
                parent_node.first_child = next;
            }
            if parent_node.last_child == child {
                parent_node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }

        tracing::trace!("removed node {:?} from {:?}", child, parent);
        Ok(child)
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Collect the subtree below a node in document order (node excluded)
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .children(id)
            .map(|(child, _)| child)
            .collect::<Vec<_>>();
        stack.reverse();

        while let Some(current) = stack.pop() {
            out.push(current);
            let mut kids: Vec<NodeId> = self.children(current).map(|(c, _)| c).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Get a form control's current value
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.value.as_str())
    }

    /// Length of a form control's value, in characters
    pub fn value_len(&self, id: NodeId) -> Option<usize> {
        self.value(id).map(|v| v.chars().count())
    }

    /// Set a form control's value, queueing an Input event
    pub fn set_value(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        let node = self.get_mut(id).ok_or(DomError::NotFound)?;
        let elem = node.as_element_mut().ok_or(DomError::NotAnElement)?;
        let old = std::mem::replace(&mut elem.value, value.to_string());
        self.events.push(DomEvent::input(id, &old, value));
        Ok(())
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let node = self.get_mut(id).ok_or(DomError::NotFound)?;
        let elem = node.as_element_mut().ok_or(DomError::NotAnElement)?;
        elem.set_attribute(name, value);
        Ok(())
    }

    /// Get an attribute from an element
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attribute(name)
    }

    /// Add a class to an element; false if missing or already present
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        self.get_mut(id)
            .and_then(|n| n.as_element_mut())
            .map(|e| e.add_class(class))
            .unwrap_or(false)
    }

    /// Remove a class from an element; false if missing or absent
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        self.get_mut(id)
            .and_then(|n| n.as_element_mut())
            .map(|e| e.remove_class(class))
            .unwrap_or(false)
    }

    /// Check class membership
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .map(|e| e.has_class(class))
            .unwrap_or(false)
    }

    /// Queue an event
    pub(crate) fn push_event(&mut self, event: DomEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in queue order
    pub fn take_events(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
