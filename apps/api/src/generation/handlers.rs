//! Axum route handlers for one-shot text generation.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{GenParams, MAX_NEW_TOKENS_CAP, TEMPERATURE_MAX, TEMPERATURE_MIN};
use crate::prompting::catalog;
use crate::prompting::compose::{compose_task, FieldValue};
use crate::prompting::output::{format_output, RenderMode};
use crate::prompting::sanitize::sanitize;
use crate::prompting::templates::TaskKind;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub task: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
    pub temperature: Option<f32>,
    pub max_new_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub task: TaskKind,
    pub text: String,
    pub render: RenderMode,
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Full pipeline for a single interaction: sanitize the free-text fields,
/// validate numeric bounds and sampling parameters, compose the template,
/// call the model, and apply task-specific output formatting.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let kind: TaskKind = request.task.parse()?;
    let template = kind.template();
    let mut fields = request.fields;

    for name in template.free_text {
        if let Some(FieldValue::Str(value)) = fields.get(*name) {
            let cleaned = sanitize(value);
            if cleaned.is_empty() {
                return Err(AppError::Validation(format!(
                    "field '{name}' cannot be empty"
                )));
            }
            fields.insert((*name).to_string(), FieldValue::Str(cleaned));
        }
    }

    for (name, min, max) in catalog::number_fields(kind) {
        if let Some(FieldValue::Int(value)) = fields.get(*name) {
            if !(min..=max).contains(&value) {
                return Err(AppError::Validation(format!(
                    "field '{name}' must be between {min} and {max}"
                )));
            }
        }
    }

    let params = resolve_params(request.temperature, request.max_new_tokens)?;
    let prompt = compose_task(kind, &fields)?;
    debug!("composed '{kind}' prompt: {} chars", prompt.chars().count());

    let raw = state.generator.generate(&prompt, params).await?;
    let formatted = format_output(kind, &raw);

    Ok(Json(GenerateResponse {
        task: kind,
        text: formatted.text,
        render: formatted.render,
        model: state.config.model_id.clone(),
    }))
}

/// Resolves optional request parameters against the studio defaults,
/// rejecting values outside the UI slider and token bounds.
pub(crate) fn resolve_params(
    temperature: Option<f32>,
    max_new_tokens: Option<u32>,
) -> Result<GenParams, AppError> {
    let mut params = GenParams::default();

    if let Some(temperature) = temperature {
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
            return Err(AppError::Validation(format!(
                "temperature must be between {TEMPERATURE_MIN} and {TEMPERATURE_MAX}"
            )));
        }
        params.temperature = temperature;
    }

    if let Some(max_new_tokens) = max_new_tokens {
        if max_new_tokens == 0 || max_new_tokens > MAX_NEW_TOKENS_CAP {
            return Err(AppError::Validation(format!(
                "max_new_tokens must be between 1 and {MAX_NEW_TOKENS_CAP}"
            )));
        }
        params.max_new_tokens = max_new_tokens;
    }

    Ok(params)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
