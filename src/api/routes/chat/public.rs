//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openai::Role;

/// One prior turn of the conversation, supplied by the caller. Role
/// values outside {system, user, assistant} are rejected when the
/// request body is deserialized.
#[derive(Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Request to relay a chat message. History is optional and defaults
/// to an empty conversation.
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// The generated reply
#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: String,
}

impl ChatResponse {
    pub fn new(response: String) -> Self {
        Self {
            response,
            status: "success".to_string(),
        }
    }
}
