//! charlimit demo - Main Entry Point
//!
//! Builds a small document with limited fields, runs the monitor, and
//! simulates typing to show the class transitions.

use std::error::Error;

use charlimit_css::{collect_document_styles, resolve_class};
use charlimit_dom::{Document, NodeId};
use charlimit_monitor::{FieldLimitMonitor, EXCEEDED_CLASS, WARNING_CLASS};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut doc = Document::new();
    let title = text_input(&mut doc, "title", Some("30"));
    let email = email_input(&mut doc, "email", Some("50"));
    let notes = textarea(&mut doc, "notes", None);

    let mut monitor = FieldLimitMonitor::new();
    monitor.init(&mut doc);

    // The textarea has no maxlength, so it needs explicit tracking
    monitor.track_element(&mut doc, notes, 80, Some(10));

    for (field, text) in [
        (title, "A fairly long document title"),
        (email, "someone@example.com"),
        (notes, "Short note"),
    ] {
        doc.tree_mut().set_value(field, text)?;
    }
    monitor.pump(&mut doc);

    for (name, field) in [("title", title), ("email", email), ("notes", notes)] {
        tracing::info!("{}: {}", name, class_state(&doc, field));
    }

    let styles = collect_document_styles(&doc);
    for decl in resolve_class(&styles, WARNING_CLASS) {
        tracing::info!(".{} {}: {}", WARNING_CLASS, decl.property, decl.value);
    }

    Ok(())
}

fn class_state(doc: &Document, field: NodeId) -> &'static str {
    if doc.tree().has_class(field, EXCEEDED_CLASS) {
        "exceeded"
    } else if doc.tree().has_class(field, WARNING_CLASS) {
        "warning"
    } else {
        "ok"
    }
}

fn text_input(doc: &mut Document, id: &str, maxlength: Option<&str>) -> NodeId {
    build_field(doc, "input", id, None, maxlength)
}

fn email_input(doc: &mut Document, id: &str, maxlength: Option<&str>) -> NodeId {
    build_field(doc, "input", id, Some("email"), maxlength)
}

fn textarea(doc: &mut Document, id: &str, maxlength: Option<&str>) -> NodeId {
    build_field(doc, "textarea", id, None, maxlength)
}

fn build_field(
    doc: &mut Document,
    tag: &str,
    id: &str,
    input_type: Option<&str>,
    maxlength: Option<&str>,
) -> NodeId {
    let body = doc.body();
    let tree = doc.tree_mut();
    let field = tree.create_element(tag);
    // Appends onto a well-formed document cannot fail
    let _ = tree.append_child(body, field);
    let _ = tree.set_attribute(field, "id", id);
    if let Some(t) = input_type {
        let _ = tree.set_attribute(field, "type", t);
    }
    if let Some(ml) = maxlength {
        let _ = tree.set_attribute(field, "maxlength", ml);
    }
    field
}
