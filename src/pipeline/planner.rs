//! Plan synthesis stage.
//!
//! DESIGN
//! ======
//! First stage of the generation pipeline. Sends the user's instruction to
//! the LLM collaborator with a system prompt that pins the component
//! vocabulary and the plan JSON schema, then repairs and parses whatever
//! comes back. When a previous artifact exists the request switches to
//! modification mode: the unwrapped content region is included so the model
//! evolves the existing UI instead of starting over.

use tracing::{debug, info};

use crate::llm::LlmChat;
use crate::pipeline::markers;
use crate::pipeline::plan::{Plan, parse_plan};
use crate::pipeline::PipelineError;

const MAX_TOKENS: u32 = 2048;

const SYSTEM_PROMPT: &str = r##"You are a Senior Full-Stack Architect and UI Planner.
Your goal is to transform user requests into high-fidelity, deterministic UI plans.

Allowed Components:
Button, Card, Input, Table, Modal, Sidebar, Navbar, Chart.

Architectural Constraints:
1. Choose "layout":
   - "dashboard": Systems, Admin panels, multi-page data views.
   - "centered": Landing pages, auth forms, single utilities.
2. Choose "layoutPattern" (Internal content arrangement):
   - "stack": Single column vertical stack.
   - "grid": Multi-column responsive grid (best for summaries/cards).
   - "split": Balanced two-column layout (form/text on one side, data/image on other).
3. Sidebar & Navbar: Always populate with logical navigation for the requested context.

Output Format:
Return ONLY a valid JSON object. No markdown. No trailing commas.

JSON Schema:
{
  "layout": "dashboard" | "centered",
  "layoutPattern": "stack" | "grid" | "split",
  "sidebar": [ { "label": "String", "link": "#" } ],
  "navbar": [ { "label": "String", "url": "#" } ],
  "components": [
    { "type": "ComponentName", "props": { ... } }
  ]
}

MODIFICATION MODE:
If existing UI code is provided, analyze it and the new request. Transform ONLY
what is necessary to meet the user's evolution while preserving layout integrity."##;

/// Synthesize a [`Plan`] from a natural-language instruction.
///
/// # Errors
///
/// Returns [`PipelineError::Collaborator`] when the LLM call fails and
/// [`PipelineError::PlanFormat`] when the response cannot be repaired into
/// a valid plan.
pub async fn synthesize_plan(
    llm: &dyn LlmChat,
    instruction: &str,
    previous_artifact: Option<&str>,
) -> Result<Plan, PipelineError> {
    let user_prompt = match previous_artifact {
        Some(artifact) => {
            let existing = markers::unwrap_previous(artifact);
            debug!(existing_len = existing.len(), "planning in modification mode");
            format!("MODIFICATION MODE:\nExisting UI Code:\n{existing}\n\nUser Request:\n{instruction}")
        }
        None => instruction.to_string(),
    };

    let response = llm.chat(MAX_TOKENS, SYSTEM_PROMPT, &user_prompt).await?;
    info!(
        model = %response.model,
        output_tokens = response.output_tokens,
        "plan synthesis response received"
    );

    parse_plan(&response.text)
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
