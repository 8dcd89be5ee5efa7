//! Content synthesis stage.
//!
//! DESIGN
//! ======
//! Second stage of the generation pipeline. Takes the structured plan and
//! asks the LLM collaborator for the `UIContent` function body, then cleans
//! the response (fence stripping, export renaming) and runs it through the
//! lexical validator. Validation failures abort the pipeline rather than
//! shipping unreviewable code to the client.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::llm::LlmChat;
use crate::pipeline::markers;
use crate::pipeline::plan::Plan;
use crate::pipeline::validator;
use crate::pipeline::PipelineError;

const MAX_TOKENS: u32 = 4096;

const SYSTEM_PROMPT: &str = r#"You are a PRO-LEVEL React UI content generator.

Architectural Rules:
- Generate ONLY a single React function named "UIContent()".
- Strictly return raw content components.
- FORBIDDEN: Any layout wrappers like <div> with flex/grid, className="flex", etc.
- FORBIDDEN: Custom CSS or inline style={{...}}.
- FORBIDDEN: Sidebar, Navbar, or external imports.
- COMPOSITION: Return components flat or wrapped in a Fragment (<>...</>).
- WHITELIST: Button, Card, Input, Table, Modal, Chart.

PRO-TIP:
- For Card, use actual children inside: <Card title="X"><Input /><Button /></Card>.
- Do not pass components as props.
- Focus on clean, modular component orchestration.

Return ONLY the code. No markdown backticks. No explanation."#;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```[a-z]*\n?").unwrap());
static CLOSING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n?```$").unwrap());

/// Strip markdown fences and normalize the exported function name.
fn clean_response(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_open = OPENING_FENCE.replace(trimmed, "");
    let without_fences = CLOSING_FENCE.replace(&without_open, "");
    without_fences
        .trim()
        .replace("export default function GeneratedUI", "export default function UIContent")
}

/// Synthesize the content region for the given plan.
///
/// # Errors
///
/// Returns [`PipelineError::Collaborator`] when the LLM call fails and
/// [`PipelineError::ContentValidation`] when the cleaned response violates
/// the content grammar.
pub async fn synthesize_content(
    llm: &dyn LlmChat,
    plan: &Plan,
    previous_artifact: Option<&str>,
) -> Result<String, PipelineError> {
    let plan_json = serde_json::to_string_pretty(plan)
        .map_err(|e| PipelineError::PlanFormat(e.to_string()))?;

    let user_prompt = match previous_artifact {
        Some(artifact) => {
            let existing = markers::unwrap_previous(artifact);
            debug!(existing_len = existing.len(), "generating in modification mode");
            format!("MODIFICATION MODE.\nExisting UIContent:\n{existing}\nUpdate per PLAN:\n{plan_json}")
        }
        None => format!("Generate UIContent using this PLAN:\n{plan_json}"),
    };

    let response = llm.chat(MAX_TOKENS, SYSTEM_PROMPT, &user_prompt).await?;
    info!(
        model = %response.model,
        output_tokens = response.output_tokens,
        "content synthesis response received"
    );

    let code = clean_response(&response.text);
    validator::validate(&code)?;
    Ok(code)
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
