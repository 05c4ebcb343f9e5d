//! Default visual styles
//!
//! The two class names are the sole styling hook. Defaults are a red
//! border and glow for exceeded, orange for warning; overrides append
//! later blocks that win under the cascade.

/// Class applied when content length strictly exceeds the limit
pub const EXCEEDED_CLASS: &str = "character-limit-exceeded";

/// Class applied when remaining characters reach the warning threshold
pub const WARNING_CLASS: &str = "character-limit-warning";

pub(crate) const EXCEEDED_RULES: &str = "\
border-color: #ff3333 !important; \
box-shadow: 0 0 0 3px rgba(255, 51, 51, 0.25) !important;";

pub(crate) const WARNING_RULES: &str = "\
border-color: #ff9933 !important; \
box-shadow: 0 0 0 3px rgba(255, 153, 51, 0.25) !important;";

/// Style block defining both classes with the default rules
pub(crate) fn default_style_block() -> String {
    format!(
        ".{EXCEEDED_CLASS} {{ {EXCEEDED_RULES} }}\n.{WARNING_CLASS} {{ {WARNING_RULES} }}\n"
    )
}

/// Style block redefining one class with caller-supplied rules
///
/// The rule text is not validated.
pub(crate) fn class_style_block(class: &str, rules: &str) -> String {
    format!(".{class} {{ {rules} }}\n")
}
