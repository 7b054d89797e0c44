//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{
        EnterLobbyRequest, LobbyViewDto, PostMessageRequest, UpdateTypingRequest,
    },
    ui::state::AppState,
};

use super::error::ApiError;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /createLobby` - returns the new lobby id as a JSON string
pub async fn create_lobby(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<String>), ApiError> {
    let lobby = state.create_lobby_usecase.execute().await?;
    tracing::info!("Lobby {} created", lobby.id);
    Ok((StatusCode::CREATED, Json(lobby.id.into_string())))
}

/// `GET /lobbyExists/{lobby_id}`
pub async fn lobby_exists(
    State(state): State<Arc<AppState>>,
    Path(lobby_id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let exists = state.lobby_exists_usecase.execute(lobby_id).await?;
    Ok(Json(exists))
}

/// `GET /lobby/{lobby_id}` - polled by clients for messages and typing state
pub async fn fetch_lobby_view(
    State(state): State<Arc<AppState>>,
    Path(lobby_id): Path<String>,
) -> Result<Json<LobbyViewDto>, ApiError> {
    let view = state.fetch_lobby_view_usecase.execute(lobby_id).await?;
    Ok(Json(view.into()))
}

/// `POST /postMessage`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<LobbyViewDto>), ApiError> {
    let view = state
        .post_message_usecase
        .execute(
            request.lobby_id,
            request.sender_name,
            request.message_content,
        )
        .await?;
    tracing::debug!("Message posted to lobby {}", view.id);
    Ok((StatusCode::CREATED, Json(view.into())))
}

/// `POST /enterLobby`
pub async fn enter_lobby(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EnterLobbyRequest>,
) -> Result<Json<LobbyViewDto>, ApiError> {
    let view = state
        .enter_lobby_usecase
        .execute(request.lobby_id, request.name)
        .await?;
    Ok(Json(view.into()))
}

/// `POST /updateTyping` - answers `{}` on success
pub async fn update_typing(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateTypingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .set_typing_usecase
        .execute(request.lobby_id, request.name, request.is_typing)
        .await?;
    Ok(Json(serde_json::json!({})))
}
