//! `POST /api/generate` — run the generation pipeline.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::{ErrorBody, GenerateRequest, GenerateResponse};
use crate::pipeline::{self, PipelineError};
use crate::security;
use crate::state::AppState;

/// Handle one generation request end to end.
///
/// Guard rejections and blank instructions fail fast with a 400 before any
/// LLM traffic. Pipeline failures map onto 422 (the model produced something
/// unusable) or 502 (the collaborator itself failed).
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorBody>)> {
    let request_id = Uuid::new_v4();
    let instruction = body.instruction.trim();

    if instruction.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("E_EMPTY_INSTRUCTION", "instruction must not be empty")),
        ));
    }

    if let Err(e) = security::check_instruction(instruction) {
        warn!(%request_id, keyword = e.keyword, "instruction blocked");
        return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::from_error(&e))));
    }

    let Some(llm) = state.llm.as_deref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody::new("E_LLM_NOT_CONFIGURED", "no LLM collaborator is configured")),
        ));
    };

    info!(
        %request_id,
        instruction_len = instruction.len(),
        modification = body.previous_artifact.is_some(),
        "generation started"
    );

    match pipeline::run(llm, instruction, body.previous_artifact.as_deref()).await {
        Ok(out) => {
            info!(%request_id, layout = ?out.plan.layout, "generation succeeded");
            Ok(Json(GenerateResponse {
                plan: out.plan,
                editable_code: out.editable_code,
                full_artifact: out.full_artifact,
                explanation: out.explanation,
            }))
        }
        Err(e) => {
            warn!(%request_id, error = %e, "generation failed");
            let status = match &e {
                PipelineError::PlanFormat(_) | PipelineError::ContentValidation(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                PipelineError::Collaborator(_) => StatusCode::BAD_GATEWAY,
            };
            Err((status, Json(ErrorBody::from_error(&e))))
        }
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
