//! DOM Node
//!
//! Sibling-linked nodes stored in an arena; NodeId links instead of
//! pointers, matching the tree's index-based layout.

use crate::{NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: NodeData::Element(ElementData::new(tag)),
        }
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: NodeData::Text(TextData { content }),
        }
    }

    /// Create a document node
    pub fn document() -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: NodeData::Document,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (lowercase)
    pub tag: String,
    /// Attributes
    pub attrs: NamedNodeMap,
    /// Cached id attribute (very common lookup)
    pub id: Option<String>,
    /// Class list, kept deduplicated
    pub classes: Vec<String>,
    /// Form-control value (inputs and textareas)
    pub value: String,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            id: None,
            classes: Vec::new(),
            value: String::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    /// Set an attribute, keeping the id and class caches in sync
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attrs.set_attribute(name, value);
        match name {
            "id" => self.id = Some(value.to_string()),
            "class" => {
                self.classes.clear();
                for part in value.split_whitespace() {
                    if !self.classes.iter().any(|c| c == part) {
                        self.classes.push(part.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.has_attribute(name)
    }

    /// Add a class; returns false if it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        self.sync_class_attr();
        true
    }

    /// Remove a class; returns false if it was not present
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        if self.classes.len() == before {
            return false;
        }
        self.sync_class_attr();
        true
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn sync_class_attr(&mut self) {
        let joined = self.classes.join(" ");
        self.attrs.set_attribute("class", &joined);
    }

    /// Is this element a text-entry form control?
    ///
    /// Single-line text inputs (type text, email, or no type, which
    /// defaults to text) and textareas qualify.
    pub fn is_text_control(&self) -> bool {
        match self.tag.as_str() {
            "textarea" => true,
            "input" => matches!(
                self.get_attribute("type").unwrap_or("text"),
                "text" | "email"
            ),
            _ => false,
        }
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_is_idempotent() {
        let mut elem = ElementData::new("input");
        assert!(elem.add_class("character-limit-warning"));
        assert!(!elem.add_class("character-limit-warning"));

        assert_eq!(elem.classes.len(), 1);
        assert_eq!(
            elem.get_attribute("class"),
            Some("character-limit-warning")
        );
    }

    #[test]
    fn test_remove_class_syncs_attribute() {
        let mut elem = ElementData::new("input");
        elem.add_class("a");
        elem.add_class("b");
        elem.remove_class("a");

        assert!(!elem.has_class("a"));
        assert!(elem.has_class("b"));
        assert_eq!(elem.get_attribute("class"), Some("b"));
    }

    #[test]
    fn test_class_attribute_populates_list() {
        let mut elem = ElementData::new("div");
        elem.set_attribute("class", "foo bar");

        assert!(elem.has_class("foo"));
        assert!(elem.has_class("bar"));
    }

    #[test]
    fn test_class_attribute_drops_repeats() {
        let mut elem = ElementData::new("div");
        elem.set_attribute("class", "foo bar foo");

        assert_eq!(elem.classes, vec!["foo", "bar"]);

        // round trip through a class mutation stays deduplicated
        elem.add_class("baz");
        assert_eq!(elem.get_attribute("class"), Some("foo bar baz"));
    }

    #[test]
    fn test_text_control_detection() {
        let mut input = ElementData::new("input");
        assert!(input.is_text_control(), "untyped input defaults to text");

        input.set_attribute("type", "email");
        assert!(input.is_text_control());

        input.set_attribute("type", "checkbox");
        assert!(!input.is_text_control());

        assert!(ElementData::new("textarea").is_text_control());
        assert!(!ElementData::new("div").is_text_control());
    }
}
