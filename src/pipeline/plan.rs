//! Plan — the structured intent object, plus the JSON repair algorithm that
//! recovers it from free-form LLM text.
//!
//! DESIGN
//! ======
//! All leniency toward the collaborator's output lives here, in one explicit
//! repair stage with a defined contract: either a value matching the Plan
//! shape comes out, or the caller gets a plan-format failure. Nothing
//! downstream ever sees partially repaired text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::PipelineError;

// =============================================================================
// PLAN SHAPE
// =============================================================================

/// Shell shape. Unknown values degrade to `Dashboard`; an absent field is a
/// plan-format failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Centered,
    #[serde(other)]
    Dashboard,
}

/// Inner content arrangement class. Absent or unknown values degrade to
/// `Stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPattern {
    Grid,
    Split,
    #[default]
    #[serde(other)]
    Stack,
}

impl LayoutPattern {
    /// CSS class suffix used by the assembler (`layout-stack` etc.).
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Grid => "grid",
            Self::Split => "split",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

/// Descriptive component entry. Never executed — it informs the content
/// synthesizer only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedComponent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
}

/// Structured description of layout, navigation, and intended components for
/// one generation request. `layout` and `components` are required; anything
/// else defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub layout: Layout,
    #[serde(default, rename = "layoutPattern")]
    pub layout_pattern: LayoutPattern,
    #[serde(default)]
    pub sidebar: Vec<SidebarItem>,
    #[serde(default)]
    pub navbar: Vec<NavbarLink>,
    pub components: Vec<PlannedComponent>,
}

// =============================================================================
// REPAIR
// =============================================================================

// `//` comments are stripped only when preceded by whitespace or line start,
// so URL-like tokens inside string values survive.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)(^|\s)//[^\n]*").expect("static regex"));
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("static regex"));
static TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("static regex"));

/// Normalize raw collaborator text toward parseable JSON: drop markdown
/// fences, slice to the outermost object, strip comments and trailing commas.
#[must_use]
pub fn repair_json(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the info string ("json", "jsx", ...) with the fence line.
        text = rest.split_once('\n').map_or(rest, |(_, body)| body);
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    let mut text = text.trim().to_string();

    if let (Some(first), Some(last)) = (text.find('{'), text.rfind('}')) {
        if first < last {
            text = text[first..=last].to_string();
        }
    }

    let text = LINE_COMMENT.replace_all(&text, "$1");
    let text = BLOCK_COMMENT.replace_all(&text, "");
    let text = TRAILING_COMMA.replace_all(&text, "$1");
    text.into_owned()
}

/// Repair and parse raw collaborator text into a [`Plan`].
///
/// # Errors
///
/// Returns [`PipelineError::PlanFormat`] when the repaired text is not valid
/// JSON or required fields (`layout`, `components` as a sequence) are absent
/// or mistyped. Never falls back to a default plan.
pub fn parse_plan(raw: &str) -> Result<Plan, PipelineError> {
    let repaired = repair_json(raw);
    serde_json::from_str(&repaired).map_err(|e| PipelineError::PlanFormat(e.to_string()))
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
