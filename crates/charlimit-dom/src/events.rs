//! DOM Events
//!
//! Change events recorded as data. The tree queues events as mutations
//! happen; consumers drain the queue and react, which stands in for
//! per-element listener callbacks.

use crate::NodeId;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventType {
    /// A form control's value changed
    Input,
    /// A node was detached from the document
    NodeRemoved,
    /// Document construction finished
    ContentLoaded,
}

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    pub prev_value: Option<String>,
    pub new_value: Option<String>,
}

impl DomEvent {
    /// Create an input event for a value change
    pub fn input(target: NodeId, old_value: &str, new_value: &str) -> Self {
        Self {
            event_type: DomEventType::Input,
            target,
            prev_value: Some(old_value.to_string()),
            new_value: Some(new_value.to_string()),
        }
    }

    /// Create a node removed event
    pub fn node_removed(target: NodeId) -> Self {
        Self {
            event_type: DomEventType::NodeRemoved,
            target,
            prev_value: None,
            new_value: None,
        }
    }

    /// Create a content loaded event
    pub fn content_loaded(target: NodeId) -> Self {
        Self {
            event_type: DomEventType::ContentLoaded,
            target,
            prev_value: None,
            new_value: None,
        }
    }
}
