//! HTTP API request/response DTOs for the chat application.
//!
//! Field names follow the JSON contract the web client already speaks
//! (`messageId`, `messageContent`, `isTyping`, ...).

use serde::{Deserialize, Serialize};

/// Message inside a lobby view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub message_id: i64,
    pub lobby_id: String,
    pub sender_name: String,
    pub message_content: String,
    pub timestamp: i64, // Unix seconds
}

/// Sender inside a lobby view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderDto {
    pub name: String,
    pub lobby_id: String,
    pub is_typing: bool,
}

/// Lobby view returned by fetch / post / enter endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyViewDto {
    pub id: String,
    pub messages: Vec<MessageDto>,
    pub senders: Vec<SenderDto>,
}

/// Body of `POST /postMessage`
///
/// Missing fields default to empty strings, so a request without a lobby id is
/// answered with "unknown lobby" rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMessageRequest {
    pub lobby_id: String,
    pub sender_name: String,
    pub message_content: String,
}

/// Body of `POST /enterLobby`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnterLobbyRequest {
    pub name: String,
    pub lobby_id: String,
}

/// Body of `POST /updateTyping`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTypingRequest {
    pub name: String,
    pub lobby_id: String,
    pub is_typing: bool,
}

/// Error body for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
