//! CSS Parser using lightningcss
//!
//! Parses CSS text into the owned stylesheet representation.

use crate::{CssError, Declaration, Rule, Selector, Stylesheet};
use lightningcss::printer::PrinterOptions;
use lightningcss::properties::Property;
use lightningcss::traits::ToCss;

/// CSS Parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSS stylesheet
    pub fn parse(&self, css: &str) -> Result<Stylesheet, CssError> {
        use lightningcss::stylesheet::{ParserOptions, StyleSheet};

        let options = ParserOptions::default();

        let stylesheet = StyleSheet::parse(css, options).map_err(|e| CssError::ParseError {
            message: format!("{:?}", e),
        })?;

        let mut result = Stylesheet::new();

        for rule in stylesheet.rules.0.iter() {
            if let Some(converted) = self.convert_rule(rule) {
                result.rules.push(converted);
            }
        }

        Ok(result)
    }

    fn convert_rule(&self, rule: &lightningcss::rules::CssRule) -> Option<Rule> {
        use lightningcss::rules::CssRule;

        match rule {
            CssRule::Style(style_rule) => {
                let selectors = self.convert_selectors(&style_rule.selectors);
                let declarations = self.convert_declarations(&style_rule.declarations);

                Some(Rule {
                    selectors,
                    declarations,
                })
            }
            // Skip other rule types (media queries, keyframes, ...)
            _ => None,
        }
    }

    fn convert_selectors(&self, selectors: &lightningcss::selector::SelectorList) -> Vec<Selector> {
        selectors
            .0
            .iter()
            .map(|sel| {
                let text = sel
                    .to_css_string(PrinterOptions::default())
                    .unwrap_or_else(|_| format!("{:?}", sel));
                Selector { text }
            })
            .collect()
    }

    fn convert_declarations(
        &self,
        declarations: &lightningcss::declaration::DeclarationBlock,
    ) -> Vec<Declaration> {
        let mut result = Vec::new();

        for decl in declarations.declarations.iter() {
            if let Some(converted) = self.convert_declaration(decl, false) {
                result.push(converted);
            }
        }

        for decl in declarations.important_declarations.iter() {
            if let Some(converted) = self.convert_declaration(decl, true) {
                result.push(converted);
            }
        }

        result
    }

    fn convert_declaration(&self, decl: &Property, important: bool) -> Option<Declaration> {
        let property = decl.property_id().name().to_string();
        let value = decl.value_to_css_string(PrinterOptions::default()).ok()?;

        Some(Declaration {
            property,
            value,
            important,
        })
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}
