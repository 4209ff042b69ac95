//! Chat Service
//!
//! Conversation with the analysis assistant.

use serde_json::json;

use super::request::{ApiError, ApiRequest};
use super::Ack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<u32>,
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ChatMessage {
    /// Local echo of what the user just typed, shown before the reply lands.
    pub fn local_user(content: &str) -> Self {
        Self {
            id: None,
            role: MessageRole::User,
            content: content.to_string(),
            created_at: None,
        }
    }
}

#[derive(serde::Deserialize)]
struct HistoryResponse {
    messages: Vec<ChatMessage>,
}

#[derive(serde::Deserialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}

pub(crate) fn send_message_request(message: &str) -> ApiRequest {
    ApiRequest::post("chat/message").json(json!({ "message": message }))
}

/// Send a message and get the assistant's reply.
pub async fn send_message(message: &str) -> Result<ChatMessage, ApiError> {
    send_message_request(message).send().await
}

pub async fn history() -> Result<Vec<ChatMessage>, ApiError> {
    let response: HistoryResponse = ApiRequest::get("chat/history").send().await?;
    Ok(response.messages)
}

/// Delete the stored conversation.
pub async fn clear() -> Result<Ack, ApiError> {
    ApiRequest::delete("chat/history").send().await
}

/// Suggested prompts to show as chips.
pub async fn suggestions() -> Result<Vec<String>, ApiError> {
    let response: SuggestionsResponse = ApiRequest::get("chat/suggestions").send().await?;
    Ok(response.suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;

    #[test]
    fn test_send_message_posts_body() {
        let req = send_message_request("Who wins tonight?");
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.path(), "chat/message");
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({"message": "Who wins tonight?"}))
        );
    }

    #[test]
    fn test_local_user_message_has_no_id() {
        let message = ChatMessage::local_user("hi");
        assert_eq!(message.role, MessageRole::User);
        assert!(message.id.is_none());
    }
}
