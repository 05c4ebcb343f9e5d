//! charlimit DOM - Document Object Model
//!
//! Arena-based DOM tree, trimmed to what the character limit monitor
//! needs: elements with attributes, class lists, form-control values,
//! simple selector queries, and change events recorded as data.

mod attributes;
mod document;
mod events;
mod node;
mod query;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use events::{DomEvent, DomEventType};
pub use node::{ElementData, Node, NodeData, TextData};
pub use query::SimpleSelector;
pub use tree::{DomError, DomResult, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id refers to a node
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}
