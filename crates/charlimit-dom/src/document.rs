//! Document - High-level document API

use crate::{DomEvent, DomTree, NodeId};

/// HTML Document
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with the basic html/head/body structure
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Structural appends on a fresh tree cannot fail
        let root = tree.root();
        let _ = tree.append_child(root, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        let content_loaded = DomEvent::content_loaded(root);
        tree.push_event(content_loaded);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Append a <style> element holding the given CSS text to <head>
    ///
    /// Blocks accumulate in insertion order; later blocks win under
    /// last-wins cascade resolution.
    pub fn append_style(&mut self, css: &str) -> NodeId {
        let style = self.tree.create_element("style");
        let text = self.tree.create_text(css);
        let _ = self.tree.append_child(style, text);
        let _ = self.tree.append_child(self.head_element, style);
        tracing::debug!("appended style block ({} bytes)", css.len());
        style
    }

    /// Text of every <style> block in <head>, in insertion order
    pub fn style_blocks(&self) -> Vec<String> {
        let mut blocks = Vec::new();
        for (style_id, node) in self.tree.children(self.head_element) {
            let is_style = node
                .as_element()
                .map(|e| e.tag == "style")
                .unwrap_or(false);
            if !is_style {
                continue;
            }
            let text: String = self
                .tree
                .children(style_id)
                .filter_map(|(_, child)| child.as_text())
                .collect();
            blocks.push(text);
        }
        blocks
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node_id| {
                self.tree
                    .get(node_id)
                    .and_then(|n| n.as_element())
                    .map(|e| e.id.as_deref() == Some(id))
                    .unwrap_or(false)
            })
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
