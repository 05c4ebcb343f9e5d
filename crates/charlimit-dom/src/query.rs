//! Element Queries
//!
//! Simple selector parsing and document-order matching.

use crate::{DomTree, ElementData, NodeId};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_lowercase()))
        }
    }

    /// Check whether an element matches this selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id.as_deref() == Some(id),
            Self::Class(class) => elem.has_class(class),
        }
    }
}

impl DomTree {
    /// Query all elements matching a simple selector, in document order
    ///
    /// Unparseable selector text matches nothing.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(sel) = SimpleSelector::parse(selector) else {
            return Vec::new();
        };

        self.descendants(self.root())
            .into_iter()
            .filter(|&id| {
                self.get(id)
                    .and_then(|n| n.as_element())
                    .map(|e| sel.matches(e))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Query the first element matching a simple selector
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }
}
