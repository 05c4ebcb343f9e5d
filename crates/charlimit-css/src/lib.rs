//! charlimit CSS - Stylesheet model
//!
//! Parses injected style blocks into an owned rule list and resolves the
//! effective declarations for a class with last-wins cascade semantics.

mod cascade;
mod parser;

pub use cascade::{collect_document_styles, resolve_class};
pub use parser::CssParser;

/// Parse a CSS stylesheet
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet, CssError> {
    CssParser::new().parse(css)
}

/// Parsed stylesheet
#[derive(Debug, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }
}

/// CSS rule
#[derive(Debug)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// CSS selector, text kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub text: String,
}

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

/// CSS parsing error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("parse error: {message}")]
    ParseError { message: String },
}
