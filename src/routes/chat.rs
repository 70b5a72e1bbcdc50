use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, LegacyQuery, validate_message},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = validate_message(payload.message.as_deref(), state.max_message_chars)?;

    let reply = state.engine.get_response(message).await?;
    tracing::info!(confidence = reply.confidence, "chat reply");

    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}

// Plain-text variant kept for the old jQuery page.
pub async fn legacy_get_handler(
    State(state): State<SharedState>,
    Query(query): Query<LegacyQuery>,
) -> Result<String, AppError> {
    let message = validate_message(query.msg.as_deref(), state.max_message_chars)?;

    let reply = state.engine.get_response(message).await?;
    tracing::info!(confidence = reply.confidence, "legacy reply");

    Ok(reply.text)
}
