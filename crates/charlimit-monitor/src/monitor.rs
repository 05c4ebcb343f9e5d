//! Field Limit Monitor
//!
//! Style registration, discovery, per-field tracking, and the public API.

use std::collections::HashMap;

use charlimit_dom::{Document, DomEvent, DomEventType, NodeId};

use crate::config::MonitorConfig;
use crate::limit::{FieldLimit, LimitState};
use crate::styles::{class_style_block, default_style_block, EXCEEDED_CLASS, WARNING_CLASS};

/// A field under active monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedField {
    /// Maximum permitted content length
    pub limit: FieldLimit,
    /// Remaining characters at or below which the warning state shows,
    /// captured at registration time
    pub warning_threshold: u32,
}

/// Monitors text fields and toggles the warning/exceeded classes
///
/// All operations are best-effort: malformed input, missing nodes, and
/// empty selector matches degrade silently.
pub struct FieldLimitMonitor {
    config: MonitorConfig,
    registry: HashMap<NodeId, TrackedField>,
    styles_injected: bool,
}

impl FieldLimitMonitor {
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::default())
    }

    pub fn with_config(config: MonitorConfig) -> Self {
        Self {
            config,
            registry: HashMap::new(),
            styles_injected: false,
        }
    }

    /// Initialize against a document: inject the default styles (once)
    /// and auto-discover fields declaring a maxlength attribute.
    ///
    /// Safe to call repeatedly; the style injection is latched and
    /// already-tracked fields are not re-registered. Returns the number
    /// of newly discovered fields.
    pub fn init(&mut self, doc: &mut Document) -> usize {
        self.ensure_default_styles(doc);
        let found = self.discover(doc);
        tracing::info!(
            "character limit styling initialized ({} fields tracked)",
            self.registry.len()
        );
        found
    }

    /// Scan for text controls with a maxlength attribute and track them
    ///
    /// Uses the current default warning threshold. Elements without the
    /// attribute are left untouched; a non-numeric value is tracked as
    /// [`FieldLimit::Invalid`] and never flagged.
    pub fn discover(&mut self, doc: &mut Document) -> usize {
        let tree = doc.tree();
        let candidates: Vec<(NodeId, FieldLimit)> = tree
            .descendants(tree.root())
            .into_iter()
            .filter(|id| !self.registry.contains_key(id))
            .filter_map(|id| {
                let elem = tree.get(id)?.as_element()?;
                if !elem.is_text_control() {
                    return None;
                }
                let raw = elem.get_attribute("maxlength")?;
                Some((id, FieldLimit::parse(raw)))
            })
            .collect();

        let mut count = 0;
        for (id, limit) in candidates {
            if self.register(doc, id, limit, None) {
                count += 1;
            }
        }
        tracing::debug!("auto-discovery registered {} fields", count);
        count
    }

    /// Track one element with the given limit
    ///
    /// Applies the correct class immediately from the element's current
    /// value length. Non-element targets are ignored. Omitting the
    /// threshold uses the current default.
    pub fn track_element(
        &mut self,
        doc: &mut Document,
        id: NodeId,
        limit: u32,
        warning_threshold: Option<u32>,
    ) {
        self.register(doc, id, FieldLimit::Chars(limit), warning_threshold);
    }

    /// Track every element matching a selector, independently
    ///
    /// Returns the number of matched elements; zero matches is a no-op.
    pub fn track_by_selector(
        &mut self,
        doc: &mut Document,
        selector: &str,
        limit: u32,
        warning_threshold: Option<u32>,
    ) -> usize {
        let matches = doc.tree().query_selector_all(selector);
        for &id in &matches {
            self.register(doc, id, FieldLimit::Chars(limit), warning_threshold);
        }
        matches.len()
    }

    /// Stop tracking an element and clear both classes from it
    pub fn untrack_element(&mut self, doc: &mut Document, id: NodeId) {
        if self.registry.remove(&id).is_some() {
            let tree = doc.tree_mut();
            tree.remove_class(id, EXCEEDED_CLASS);
            tree.remove_class(id, WARNING_CLASS);
        }
    }

    /// Update the default warning threshold
    ///
    /// Affects future registrations only; fields that captured the old
    /// default keep it.
    pub fn set_warning_threshold(&mut self, characters: u32) {
        self.config.warning_threshold = characters;
    }

    /// Current default warning threshold
    pub fn warning_threshold(&self) -> u32 {
        self.config.warning_threshold
    }

    /// Append a style block redefining the warning class
    ///
    /// The rule text is not validated; the block is injected after the
    /// defaults and wins under last-wins cascade resolution.
    pub fn set_warning_style(&mut self, doc: &mut Document, rules: &str) {
        self.ensure_default_styles(doc);
        doc.append_style(&class_style_block(WARNING_CLASS, rules));
    }

    /// Append a style block redefining the exceeded class
    pub fn set_exceeded_style(&mut self, doc: &mut Document, rules: &str) {
        self.ensure_default_styles(doc);
        doc.append_style(&class_style_block(EXCEEDED_CLASS, rules));
    }

    /// Drain the document's pending events and react to them
    ///
    /// Input events on tracked fields re-evaluate that field; node
    /// removal evicts the field from the registry. Returns the number
    /// of events that touched monitor state.
    pub fn pump(&mut self, doc: &mut Document) -> usize {
        let events = doc.tree_mut().take_events();
        let mut handled = 0;
        for event in &events {
            if self.handle_event(doc, event) {
                handled += 1;
            }
        }
        handled
    }

    /// React to a single event; true if it affected a tracked field
    pub fn handle_event(&mut self, doc: &mut Document, event: &DomEvent) -> bool {
        match event.event_type {
            DomEventType::Input => {
                if self.registry.contains_key(&event.target) {
                    self.evaluate(doc, event.target);
                    true
                } else {
                    false
                }
            }
            DomEventType::NodeRemoved => self.registry.remove(&event.target).is_some(),
            DomEventType::ContentLoaded => false,
        }
    }

    /// Check whether an element is tracked
    pub fn is_tracked(&self, id: NodeId) -> bool {
        self.registry.contains_key(&id)
    }

    /// Number of tracked fields
    pub fn tracked_count(&self) -> usize {
        self.registry.len()
    }

    /// Registered limit/threshold for an element
    pub fn field(&self, id: NodeId) -> Option<&TrackedField> {
        self.registry.get(&id)
    }

    fn ensure_default_styles(&mut self, doc: &mut Document) {
        if self.styles_injected {
            return;
        }
        doc.append_style(&default_style_block());
        self.styles_injected = true;
    }

    fn register(
        &mut self,
        doc: &mut Document,
        id: NodeId,
        limit: FieldLimit,
        warning_threshold: Option<u32>,
    ) -> bool {
        let is_element = doc.tree().get(id).map(|n| n.is_element()).unwrap_or(false);
        if !is_element {
            tracing::debug!("ignoring non-element track target {:?}", id);
            return false;
        }

        let field = TrackedField {
            limit,
            warning_threshold: warning_threshold.unwrap_or(self.config.warning_threshold),
        };
        self.registry.insert(id, field);
        self.evaluate(doc, id);
        true
    }

    fn evaluate(&self, doc: &mut Document, id: NodeId) {
        let Some(field) = self.registry.get(&id) else {
            return;
        };
        let len = doc.tree().value_len(id).unwrap_or(0);
        let state = LimitState::classify(len, field.limit, field.warning_threshold);

        let tree = doc.tree_mut();
        match state {
            LimitState::Exceeded => {
                tree.remove_class(id, WARNING_CLASS);
                tree.add_class(id, EXCEEDED_CLASS);
            }
            LimitState::Warning => {
                tree.remove_class(id, EXCEEDED_CLASS);
                tree.add_class(id, WARNING_CLASS);
            }
            LimitState::Clear => {
                tree.remove_class(id, EXCEEDED_CLASS);
                tree.remove_class(id, WARNING_CLASS);
            }
        }
        tracing::trace!("field {:?}: len={} -> {:?}", id, len, state);
    }
}

impl Default for FieldLimitMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_input(doc: &mut Document, maxlength: Option<&str>) -> NodeId {
        let body = doc.body();
        let tree = doc.tree_mut();
        let input = tree.create_element("input");
        tree.append_child(body, input).unwrap();
        if let Some(ml) = maxlength {
            tree.set_attribute(input, "maxlength", ml).unwrap();
        }
        input
    }

    #[test]
    fn test_registration_evaluates_immediately() {
        let mut doc = Document::new();
        let input = text_input(&mut doc, None);
        let mut monitor = FieldLimitMonitor::new();

        // limit=10, default threshold 20, empty content: 10 remaining <= 20
        monitor.track_element(&mut doc, input, 10, None);

        assert!(doc.tree().has_class(input, WARNING_CLASS));
        assert!(!doc.tree().has_class(input, EXCEEDED_CLASS));
    }

    #[test]
    fn test_input_event_flips_to_exceeded() {
        let mut doc = Document::new();
        let input = text_input(&mut doc, None);
        let mut monitor = FieldLimitMonitor::new();
        monitor.track_element(&mut doc, input, 10, None);

        doc.tree_mut().set_value(input, "12345678901").unwrap();
        monitor.pump(&mut doc);

        assert!(doc.tree().has_class(input, EXCEEDED_CLASS));
        assert!(!doc.tree().has_class(input, WARNING_CLASS));
    }

    #[test]
    fn test_untracked_input_is_ignored() {
        let mut doc = Document::new();
        let input = text_input(&mut doc, None);
        let mut monitor = FieldLimitMonitor::new();

        doc.tree_mut().set_value(input, "hello").unwrap();
        assert_eq!(monitor.pump(&mut doc), 0);
        assert!(!doc.tree().has_class(input, WARNING_CLASS));
    }

    #[test]
    fn test_untrack_clears_classes() {
        let mut doc = Document::new();
        let input = text_input(&mut doc, None);
        let mut monitor = FieldLimitMonitor::new();
        monitor.track_element(&mut doc, input, 10, None);
        assert!(doc.tree().has_class(input, WARNING_CLASS));

        monitor.untrack_element(&mut doc, input);

        assert!(!monitor.is_tracked(input));
        assert!(!doc.tree().has_class(input, WARNING_CLASS));
        assert!(!doc.tree().has_class(input, EXCEEDED_CLASS));
    }

    #[test]
    fn test_threshold_change_affects_future_registrations_only() {
        let mut doc = Document::new();
        let first = text_input(&mut doc, None);
        let second = text_input(&mut doc, None);
        let mut monitor = FieldLimitMonitor::new();

        monitor.track_element(&mut doc, first, 100, None);
        monitor.set_warning_threshold(5);
        monitor.track_element(&mut doc, second, 100, None);

        assert_eq!(monitor.field(first).unwrap().warning_threshold, 20);
        assert_eq!(monitor.field(second).unwrap().warning_threshold, 5);
    }

    #[test]
    fn test_node_removal_evicts_registry_entry() {
        let mut doc = Document::new();
        let input = text_input(&mut doc, None);
        let mut monitor = FieldLimitMonitor::new();
        monitor.track_element(&mut doc, input, 10, None);

        let body = doc.body();
        doc.tree_mut().remove_child(body, input).unwrap();
        monitor.pump(&mut doc);

        assert!(!monitor.is_tracked(input));
    }

    #[test]
    fn test_track_missing_node_is_silent() {
        let mut doc = Document::new();
        let mut monitor = FieldLimitMonitor::new();
        let body = doc.body();
        let text = doc.tree_mut().create_text("not an element");
        doc.tree_mut().append_child(body, text).unwrap();

        monitor.track_element(&mut doc, text, 10, None);

        assert_eq!(monitor.tracked_count(), 0);
    }
}
