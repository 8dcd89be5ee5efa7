//! Instruction guard.
//!
//! Screens incoming instructions for prompt-injection and styling-override
//! phrases before any LLM call is made. This is a keyword scan, not a
//! classifier; it catches the obvious attempts cheaply and lets the
//! downstream content validator handle whatever slips through.

use crate::api::ErrorCode;

const BLOCKED_KEYWORDS: &[&str] =
    &["ignore previous", "add new component", "create css", "tailwind", "inline style"];

/// Rejection raised by the instruction guard.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("blocked keyword detected: \"{keyword}\"")]
pub struct GuardError {
    pub keyword: &'static str,
}

impl ErrorCode for GuardError {
    fn error_code(&self) -> &'static str {
        "E_BLOCKED_INSTRUCTION"
    }

    fn retryable(&self) -> bool {
        false
    }
}

/// Check an instruction against the blocked keyword list, case-insensitively.
///
/// # Errors
///
/// Returns [`GuardError`] naming the first matched keyword.
pub fn check_instruction(instruction: &str) -> Result<(), GuardError> {
    let lowered = instruction.to_lowercase();
    for keyword in BLOCKED_KEYWORDS {
        if lowered.contains(keyword) {
            return Err(GuardError { keyword });
        }
    }
    Ok(())
}
