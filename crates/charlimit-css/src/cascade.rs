//! Cascade resolution
//!
//! Collects a document's injected style blocks and resolves the
//! effective declarations for a class. Rules apply in stylesheet order
//! with later declarations overriding earlier ones per property;
//! important declarations beat normal ones regardless of order.

use crate::{parse_stylesheet, Declaration, Stylesheet};
use charlimit_dom::Document;

/// Parse every <style> block in the document head, in insertion order
///
/// Blocks that fail to parse are skipped; injected rule text carries no
/// validation contract.
pub fn collect_document_styles(doc: &Document) -> Stylesheet {
    let mut combined = Stylesheet::new();

    for block in doc.style_blocks() {
        match parse_stylesheet(&block) {
            Ok(sheet) => combined.rules.extend(sheet.rules),
            Err(e) => tracing::debug!("skipping unparseable style block: {}", e),
        }
    }

    combined
}

/// Resolve the effective declarations for `.{class}`
///
/// Returns one declaration per property, in first-seen property order.
pub fn resolve_class(sheet: &Stylesheet, class: &str) -> Vec<Declaration> {
    let selector = format!(".{class}");
    // (property, winning declaration) in first-seen order
    let mut resolved: Vec<Declaration> = Vec::new();

    for rule in &sheet.rules {
        if !rule.selectors.iter().any(|s| s.text == selector) {
            continue;
        }
        for decl in &rule.declarations {
            match resolved.iter_mut().find(|d| d.property == decl.property) {
                Some(existing) => {
                    if decl.important || !existing.important {
                        *existing = decl.clone();
                    }
                }
                None => resolved.push(decl.clone()),
            }
        }
    }

    resolved
}
