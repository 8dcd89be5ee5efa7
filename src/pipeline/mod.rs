//! UI generation pipeline.
//!
//! DESIGN
//! ======
//! Four stages run per request: plan synthesis, content synthesis, layout
//! assembly, and explanation synthesis. The first two are sequential (the
//! generator consumes the planner's output); assembly is deterministic local
//! work and runs while the explanation request is in flight. A failure in
//! any LLM-backed stage aborts the whole request — partial artifacts are
//! never returned.

use tracing::debug;

use crate::api::ErrorCode;
use crate::llm::{LlmChat, LlmError};

pub mod designer;
pub mod explainer;
pub mod generator;
pub mod markers;
pub mod plan;
pub mod planner;
pub mod validator;
pub mod vocab;

use plan::Plan;
use validator::ContentViolation;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The planner response could not be repaired into a valid plan.
    #[error("plan format invalid: {0}")]
    PlanFormat(String),

    /// The generated content violated the content grammar.
    #[error(transparent)]
    ContentValidation(#[from] ContentViolation),

    /// The LLM collaborator call failed.
    #[error(transparent)]
    Collaborator(#[from] LlmError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PlanFormat(_) => "E_PLAN_FORMAT",
            Self::ContentValidation(v) => v.error_code(),
            Self::Collaborator(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            // A fresh completion may well parse or validate.
            Self::PlanFormat(_) | Self::ContentValidation(_) => true,
            Self::Collaborator(e) => e.retryable(),
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Everything a successful generation run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub plan: Plan,
    /// The content region on its own, for the client-side editor.
    pub editable_code: String,
    /// The complete marked artifact, shell included.
    pub full_artifact: String,
    pub explanation: String,
}

// =============================================================================
// DRIVER
// =============================================================================

/// Run the full pipeline for one instruction.
///
/// `previous_artifact` switches the planner and generator into modification
/// mode so the model evolves the existing UI instead of replacing it.
///
/// # Errors
///
/// Returns the first stage failure; see [`PipelineError`].
pub async fn run(
    llm: &dyn LlmChat,
    instruction: &str,
    previous_artifact: Option<&str>,
) -> Result<PipelineOutput, PipelineError> {
    let plan = planner::synthesize_plan(llm, instruction, previous_artifact).await?;
    debug!(layout = ?plan.layout, components = plan.components.len(), "plan synthesized");

    let content = generator::synthesize_content(llm, &plan, previous_artifact).await?;

    // Assembly is pure local work; overlap it with the explanation request.
    let explanation_fut = explainer::explain_plan(llm, &plan);
    let full_artifact = designer::assemble(&plan, &content);
    let explanation = explanation_fut.await?;

    let editable_code = markers::extract_content(&full_artifact)
        .map_or_else(|| full_artifact.clone(), |region| region.trim().to_string());

    Ok(PipelineOutput { plan, editable_code, full_artifact, explanation })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
