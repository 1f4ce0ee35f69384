//! Axum route handlers for the survey-generation API.
//!
//! Response shaping preserves the original service contract: a wrong
//! burning-problem count is always 400, while decode/generation failures
//! default to 200 with an `error` field and the raw model output
//! (`SURVEY_STRICT_ERRORS=true` switches them to 422).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::catalog::{categories_for, strategy_for, GuardrailCategory, StageStrategy};
use crate::errors::AppError;
use crate::models::startup::{LifecycleStage, SurveyRequest, BURNING_PROBLEM_COUNT};
use crate::survey::decode::DecodeError;
use crate::survey::engine::{generate_survey, render, SurveyError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub prompt: String,
    pub stage: LifecycleStage,
    #[serde(rename = "studyId")]
    pub study_id: String,
}

#[derive(Debug, Serialize)]
pub struct GuardrailsResponse {
    pub stage: LifecycleStage,
    pub strategy: &'static StageStrategy,
    pub categories: &'static [GuardrailCategory],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/survey-generator
///
/// Full pipeline: render → model call → decode. Returns the validated
/// questions plus stage metadata, or a diagnostic body carrying the raw
/// model output.
pub async fn handle_generate_survey(
    State(state): State<AppState>,
    Json(request): Json<SurveyRequest>,
) -> Response {
    // Validate burning problems count
    let received = request.startup.burning_problems.len();
    if received != BURNING_PROBLEM_COUNT {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Exactly 3 burning problems are required",
                "received": received,
                "studyId": request.study_id,
            })),
        )
            .into_response();
    }

    match generate_survey(state.generator.as_ref(), &request, &state.policy).await {
        Ok(survey) => (
            StatusCode::OK,
            Json(json!({
                "questions": survey.questions,
                "stage": survey.stage,
                "burningProblems": request.startup.burning_problems,
                "studyId": request.study_id,
                "metadata": {
                    "stage_focus": survey.strategy.primary_focus,
                    "validation_goal": survey.strategy.validation_goal,
                    "distribution_policy": state.policy.name,
                },
            })),
        )
            .into_response(),
        Err(SurveyError::InvalidRequest(e)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": e.to_string(),
                "studyId": request.study_id,
            })),
        )
            .into_response(),
        Err(err) => {
            warn!(
                "Survey generation failed for study {}: {err}",
                request.study_id
            );
            let status = if state.config.strict_decode_failures {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::OK
            };
            (status, Json(failure_body(&err, &request.study_id))).into_response()
        }
    }
}

/// POST /api/ai/survey-generator/preview
///
/// Returns the exact prompt the generator would receive, without calling
/// the model. Useful for inspecting prompt contents before spending tokens.
pub async fn handle_preview_prompt(
    State(state): State<AppState>,
    Json(request): Json<SurveyRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let prompt =
        render(&request, &state.policy).map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(PreviewResponse {
        prompt,
        stage: request.startup.stage,
        study_id: request.study_id,
    }))
}

/// GET /api/ai/guardrails/:stage
///
/// Raw-label catalog lookup. The stage arrives as an untyped string, so
/// this is where the UnknownStage contract is exercised end to end.
pub async fn handle_get_guardrails(
    Path(stage): Path<String>,
) -> Result<Json<GuardrailsResponse>, AppError> {
    let stage: LifecycleStage = stage.parse()?;

    Ok(Json(GuardrailsResponse {
        stage,
        strategy: strategy_for(stage),
        categories: categories_for(stage),
    }))
}

/// Diagnostic body for generation/decode failures. The raw model output is
/// surfaced unmodified whenever a decode produced one.
fn failure_body(err: &SurveyError, study_id: &str) -> serde_json::Value {
    let mut body = json!({
        "error": err.to_string(),
        "studyId": study_id,
    });

    if let SurveyError::Decode(decode_err) = err {
        body["raw_output"] = json!(decode_err.raw());
        match decode_err {
            DecodeError::WrongCount {
                expected, actual, ..
            } => {
                body["expected"] = json!(expected);
                body["actual"] = json!(actual);
            }
            DecodeError::SchemaViolation { violations, .. } => {
                body["violations"] = json!(violations);
            }
            DecodeError::DistributionMismatch { histogram, .. } => {
                body["histogram"] = json!(histogram);
            }
            DecodeError::MalformedJson { .. } => {}
        }
    }

    body
}
