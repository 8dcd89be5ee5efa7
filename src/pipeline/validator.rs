//! Content validator — lexical containment of the generated artifact.
//!
//! DESIGN
//! ======
//! A deliberately shallow scanner, not a parser: one rule per check, ordered,
//! short-circuiting on the first violation. It rejects everything outside the
//! known-finite grammar cheaply; false negatives on exotic encodings are an
//! accepted limitation of the approach. The CSS-in-JS heuristic (backtick
//! followed by a brace block) can false-positive on legitimate template
//! literals; there is no escape mechanism.

use std::sync::LazyLock;

use regex::Regex;

use super::vocab;

// =============================================================================
// VIOLATIONS
// =============================================================================

/// The specific rule a content artifact violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentViolation {
    #[error("empty content received")]
    Empty,

    #[error("imports are forbidden in generated content")]
    ForbiddenImport,

    #[error("inline styles are forbidden; use system components")]
    InlineStyle,

    #[error("styled-components and CSS-in-JS are forbidden")]
    CssInJs,

    #[error("forbidden component <{0}>; only allowed system components may be used")]
    UnknownComponent(String),

    #[error("generated content must declare `function UIContent()`")]
    MissingContentFn,
}

impl crate::api::ErrorCode for ContentViolation {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "E_EMPTY_CONTENT",
            Self::ForbiddenImport => "E_FORBIDDEN_IMPORT",
            Self::InlineStyle => "E_INLINE_STYLE",
            Self::CssInJs => "E_CSS_IN_JS",
            Self::UnknownComponent(_) => "E_UNKNOWN_COMPONENT",
            Self::MissingContentFn => "E_MISSING_CONTENT_FN",
        }
    }
}

// =============================================================================
// CHECKS
// =============================================================================

static INLINE_STYLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)style\s*=\s*\{\{").expect("static regex"));
// Backtick text containing a brace-delimited block — heuristic, not exact.
static CSS_IN_JS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)`.*?\{.*?\}").expect("static regex"));
static CAPITALIZED_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z0-9]*)").expect("static regex"));

/// Validate a content artifact against the closed grammar.
///
/// # Errors
///
/// Returns the first [`ContentViolation`] encountered, in rule order.
pub fn validate(content: &str) -> Result<(), ContentViolation> {
    if content.trim().is_empty() {
        return Err(ContentViolation::Empty);
    }

    if content.contains("import ") || content.contains("require(") {
        return Err(ContentViolation::ForbiddenImport);
    }

    if INLINE_STYLE.is_match(content) {
        return Err(ContentViolation::InlineStyle);
    }

    if content.contains("styled.") || CSS_IN_JS.is_match(content) {
        return Err(ContentViolation::CssInJs);
    }

    for caps in CAPITALIZED_TAG.captures_iter(content) {
        let name = &caps[1];
        if !vocab::is_allowed(name) {
            return Err(ContentViolation::UnknownComponent(name.to_string()));
        }
    }

    if !content.contains("function UIContent") {
        return Err(ContentViolation::MissingContentFn);
    }

    Ok(())
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
