//! Router for the chat relay API

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

use super::public;
use crate::ai::prompt::PERSONA_PROMPT;
use crate::api::state::AppState;
use crate::openai::{Message, Role, completion};

type SharedState = Arc<AppState>;

/// Assemble the outbound message sequence: the persona turn first,
/// then the caller's history in the order given, then the new user
/// message last.
fn transcript(history: &[public::ChatTurn], message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::new(Role::System, PERSONA_PROMPT));
    for turn in history {
        messages.push(Message::new(turn.role.clone(), &turn.content));
    }
    messages.push(Message::new(Role::User, message));
    messages
}

/// Relay a chat message to the completion API and return the reply
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatResponse>, crate::api::public::ApiError> {
    let messages = transcript(&payload.conversation_history, &payload.message);

    let reply = completion(
        &state.http,
        &messages,
        &state.config.api_base_url,
        &state.config.api_key,
    )
    .await?;

    Ok(axum::Json(public::ChatResponse::new(reply)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
