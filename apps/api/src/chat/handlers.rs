use axum::{extract::State, Json};
use serde::Deserialize;

use crate::chat::responder::ChatReply;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let reply = state.responder.respond(message).await?;
    Ok(Json(reply))
}

/// GET /api/chat/greeting returns the initial message and suggestion chips.
pub async fn handle_greeting(State(state): State<AppState>) -> Json<ChatReply> {
    Json(state.responder.greeting())
}
