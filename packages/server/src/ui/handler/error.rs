//! Mapping of use case errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::ErrorResponse,
    usecase::{
        CreateLobbyError, EnterLobbyError, FetchLobbyViewError, LobbyExistsError,
        PostMessageError, SetTypingError,
    },
};

/// Error returned by every handler: a status code plus `{"message": ...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn internal(message: String) -> Self {
        tracing::error!("Internal error: {}", message);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<CreateLobbyError> for ApiError {
    fn from(e: CreateLobbyError) -> Self {
        match e {
            CreateLobbyError::GenerationExhausted(_) => {
                tracing::warn!("{}", e);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate unique id string!",
                )
            }
            CreateLobbyError::Storage(message) => Self::internal(message),
        }
    }
}

impl From<PostMessageError> for ApiError {
    fn from(e: PostMessageError) -> Self {
        match e {
            PostMessageError::BodyTooLong { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "Message is too long!")
            }
            PostMessageError::NameTooLong { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "Username is too long!")
            }
            PostMessageError::UnknownLobby(_) => Self::new(
                StatusCode::BAD_REQUEST,
                "Message did not belong to a lobby!",
            ),
            PostMessageError::Storage(message) => Self::internal(message),
        }
    }
}

impl From<EnterLobbyError> for ApiError {
    fn from(e: EnterLobbyError) -> Self {
        match e {
            EnterLobbyError::NameTooLong { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "Username is too long!")
            }
            EnterLobbyError::UnknownLobby(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Lobby does not exist!")
            }
            EnterLobbyError::Storage(message) => Self::internal(message),
        }
    }
}

impl From<SetTypingError> for ApiError {
    fn from(e: SetTypingError) -> Self {
        match e {
            SetTypingError::SenderNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, e.to_string())
            }
            SetTypingError::Storage(message) => Self::internal(message),
        }
    }
}

impl From<LobbyExistsError> for ApiError {
    fn from(e: LobbyExistsError) -> Self {
        match e {
            LobbyExistsError::Storage(message) => Self::internal(message),
        }
    }
}

impl From<FetchLobbyViewError> for ApiError {
    fn from(e: FetchLobbyViewError) -> Self {
        match e {
            FetchLobbyViewError::UnknownLobby(_) => {
                Self::new(StatusCode::NOT_FOUND, "lobby not found")
            }
            FetchLobbyViewError::Storage(message) => Self::internal(message),
        }
    }
}
