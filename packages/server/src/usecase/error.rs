//! UseCase 層のエラー定義
//!
//! `RepositoryError::LobbyNotFound` は各操作の `UnknownLobby` に、それ以外の
//! Repository エラーは `Storage` に変換します。

use thiserror::Error;

use crate::domain::{GenerationExhausted, RepositoryError, ValueObjectError};

fn storage_message(e: RepositoryError) -> String {
    match e {
        RepositoryError::Storage(message) => message,
        other => other.to_string(),
    }
}

/// ロビー作成のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateLobbyError {
    #[error(transparent)]
    GenerationExhausted(#[from] GenerationExhausted),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for CreateLobbyError {
    fn from(e: RepositoryError) -> Self {
        Self::Storage(storage_message(e))
    }
}

/// メッセージ投稿のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error("message body is too long ({actual} > {max} bytes)")]
    BodyTooLong { max: usize, actual: usize },

    #[error("sender name is too long ({actual} > {max} bytes)")]
    NameTooLong { max: usize, actual: usize },

    #[error("lobby '{0}' does not exist")]
    UnknownLobby(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ValueObjectError> for PostMessageError {
    fn from(e: ValueObjectError) -> Self {
        match e {
            ValueObjectError::BodyTooLong { max, actual } => Self::BodyTooLong { max, actual },
            ValueObjectError::NameTooLong { max, actual } => Self::NameTooLong { max, actual },
            ValueObjectError::InvalidLobbyId(id) => Self::UnknownLobby(id),
        }
    }
}

impl From<RepositoryError> for PostMessageError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::LobbyNotFound(id) => Self::UnknownLobby(id),
            other => Self::Storage(storage_message(other)),
        }
    }
}

/// ロビー入室のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnterLobbyError {
    #[error("sender name is too long ({actual} > {max} bytes)")]
    NameTooLong { max: usize, actual: usize },

    #[error("lobby '{0}' does not exist")]
    UnknownLobby(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ValueObjectError> for EnterLobbyError {
    fn from(e: ValueObjectError) -> Self {
        match e {
            // 入室で長さを検証するのは送信者名だけ
            ValueObjectError::NameTooLong { max, actual }
            | ValueObjectError::BodyTooLong { max, actual } => Self::NameTooLong { max, actual },
            ValueObjectError::InvalidLobbyId(id) => Self::UnknownLobby(id),
        }
    }
}

impl From<RepositoryError> for EnterLobbyError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::LobbyNotFound(id) => Self::UnknownLobby(id),
            other => Self::Storage(storage_message(other)),
        }
    }
}

/// 入力中フラグ更新のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetTypingError {
    #[error("sender '{name}' not found in lobby '{lobby_id}'")]
    SenderNotFound { lobby_id: String, name: String },

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for SetTypingError {
    fn from(e: RepositoryError) -> Self {
        Self::Storage(storage_message(e))
    }
}

/// ロビー存在確認のエラー（インメモリ実装では発生しない）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LobbyExistsError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for LobbyExistsError {
    fn from(e: RepositoryError) -> Self {
        Self::Storage(storage_message(e))
    }
}

/// ロビービュー取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchLobbyViewError {
    #[error("lobby '{0}' does not exist")]
    UnknownLobby(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for FetchLobbyViewError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::LobbyNotFound(id) => Self::UnknownLobby(id),
            other => Self::Storage(storage_message(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_lobby_error_from_value_object_error() {
        // テスト項目: 値オブジェクトのエラーはすべて入室エラーに変換され、パニックしない
        // given (前提条件):
        let errors = [
            ValueObjectError::NameTooLong { max: 32, actual: 33 },
            ValueObjectError::BodyTooLong { max: 32, actual: 40 },
            ValueObjectError::InvalidLobbyId("ABC".to_string()),
        ];

        // when (操作):
        let converted: Vec<EnterLobbyError> = errors.into_iter().map(Into::into).collect();

        // then (期待する結果):
        assert_eq!(
            converted,
            vec![
                EnterLobbyError::NameTooLong { max: 32, actual: 33 },
                EnterLobbyError::NameTooLong { max: 32, actual: 40 },
                EnterLobbyError::UnknownLobby("ABC".to_string()),
            ]
        );
    }

    #[test]
    fn test_storage_message_is_not_prefixed_twice() {
        // テスト項目: Storage の中身がそのまま引き継がれる
        let error = PostMessageError::from(RepositoryError::Storage("disk full".to_string()));

        assert_eq!(error, PostMessageError::Storage("disk full".to_string()));
        assert_eq!(error.to_string(), "storage error: disk full");
    }
}
