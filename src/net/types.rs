//! Serde wire types for the chat REST endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::state::chats::ChatSummary;

/// Body for `POST /get-response`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Response from `POST /get-response`.
///
/// `new_chat` is present only for the first message of a fresh session,
/// when the backend has just created the chat row.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub new_chat: Option<ChatSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One stored message in a `GET /load-chat/{chat_id}` response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct HistoryMessage {
    pub sender: String,
    pub message: String,
}

/// Response from `GET /load-chat/{chat_id}`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoadChatResponse {
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `POST /set-active-chat`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SetActiveChatRequest {
    pub chat_id: String,
}

/// Body for `POST /rename-chat`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RenameChatRequest {
    pub chat_id: String,
    pub new_title: String,
}
