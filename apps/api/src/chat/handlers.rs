//! Axum route handlers for chat sessions.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::store::{ChatSession, Role};
use crate::errors::AppError;
use crate::generation::handlers::resolve_params;
use crate::prompting::catalog::CHAT_PERSONAS;
use crate::prompting::compose::{compose_task, FieldValue};
use crate::prompting::output::{format_output, RenderMode};
use crate::prompting::sanitize::sanitize;
use crate::prompting::templates::TaskKind;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub persona: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: ChatSession,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
    pub temperature: Option<f32>,
    pub max_new_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub session_id: Uuid,
    pub reply: String,
    pub render: RenderMode,
    pub turns: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat/sessions
///
/// Opens a session with the given persona (defaulting to the first catalog
/// persona). The persona is free text from the caller's point of view, so it
/// goes through the sanitizer like any other user-typed field.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let persona = match request.persona {
        Some(p) => {
            let cleaned = sanitize(&p);
            if cleaned.is_empty() {
                return Err(AppError::Validation("persona cannot be empty".to_string()));
            }
            cleaned
        }
        None => CHAT_PERSONAS[0].to_string(),
    };

    let session = state.sessions.create(persona);
    Ok(Json(SessionResponse { session }))
}

/// GET /api/v1/chat/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    Ok(Json(SessionResponse { session }))
}

/// DELETE /api/v1/chat/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {session_id} not found")))
    }
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// Sanitizes the message, renders the transcript tail into the chat
/// template, generates a reply, and appends both turns to the session.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let message = sanitize(&request.message);
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let params = resolve_params(request.temperature, request.max_new_tokens)?;

    let mut fields: HashMap<String, FieldValue> = HashMap::new();
    fields.insert("persona".to_string(), session.persona.clone().into());
    fields.insert("history".to_string(), session.render_history().into());
    fields.insert("message".to_string(), message.clone().into());

    let prompt = compose_task(TaskKind::Chat, &fields)?;
    let raw = state.generator.generate(&prompt, params).await?;
    let formatted = format_output(TaskKind::Chat, &raw);

    state.sessions.append(session_id, Role::User, message);
    let turns = state
        .sessions
        .append(session_id, Role::Assistant, formatted.text.clone())
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(ChatMessageResponse {
        session_id,
        reply: formatted.text,
        render: formatted.render,
        turns,
    }))
}
