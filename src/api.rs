//! Wire contract for the generation boundary.
//!
//! DESIGN
//! ======
//! - Request carries the instruction plus an optional previously assembled
//!   artifact (modification mode).
//! - Success carries the plan, the editor-facing content region, the full
//!   assembled artifact, and the explanation.
//! - Failure carries a human-readable message plus a grepable error kind and
//!   retryable flag, so clients can report errors without crashing and keep
//!   the previously visible artifact unchanged.

use serde::{Deserialize, Serialize};

use crate::pipeline::plan::Plan;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for structured error responses.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub instruction: String,
    /// Full artifact from a prior generation. Presence switches the pipeline
    /// into modification mode.
    #[serde(default)]
    pub previous_artifact: Option<String>,
}

/// Successful generation response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub plan: Plan,
    /// The marker-delimited content region, for the editor pane.
    pub editable_code: String,
    /// The complete assembled artifact, for preview and future modification.
    pub full_artifact: String,
    pub explanation: String,
}

/// Structured failure response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_message: String,
    pub error_kind: String,
    pub retryable: bool,
}

impl ErrorBody {
    #[must_use]
    pub fn new(kind: &str, message: impl Into<String>) -> Self {
        Self { error_message: message.into(), error_kind: kind.to_string(), retryable: false }
    }

    /// Build an error body from a typed error.
    #[must_use]
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { error_message: err.to_string(), error_kind: err.error_code().to_string(), retryable: err.retryable() }
    }
}

// =============================================================================
// TESTS
// =============================================================================
