//! Explanation synthesis stage.
//!
//! Produces a short design rationale for the chosen plan. Runs off the plan
//! alone, so the pipeline can overlap it with layout assembly.

use tracing::info;

use crate::llm::LlmChat;
use crate::pipeline::plan::Plan;
use crate::pipeline::PipelineError;

const MAX_TOKENS: u32 = 512;

const SYSTEM_PROMPT: &str = "You are a UI design explainer.\n\n\
Explain:\n\
- Why each component was selected\n\
- Why the layout was structured that way\n\
- Keep explanation simple\n\
- 4-6 sentences\n\
- No code";

/// Explain the design decisions behind a plan in a few plain sentences.
///
/// # Errors
///
/// Returns [`PipelineError::Collaborator`] when the LLM call fails.
pub async fn explain_plan(llm: &dyn LlmChat, plan: &Plan) -> Result<String, PipelineError> {
    let plan_json =
        serde_json::to_string(plan).map_err(|e| PipelineError::PlanFormat(e.to_string()))?;

    let response = llm.chat(MAX_TOKENS, SYSTEM_PROMPT, &plan_json).await?;
    info!(model = %response.model, "explanation response received");

    Ok(response.text.trim().to_string())
}
