//! Domain 層のエラー定義

use thiserror::Error;

/// Value Object の生成時に発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// ロビー ID の形式が不正（長さ・文字種）
    #[error("invalid lobby id: '{0}'")]
    InvalidLobbyId(String),

    /// 送信者名が長すぎる
    #[error("sender name is too long ({actual} > {max} bytes)")]
    NameTooLong { max: usize, actual: usize },

    /// メッセージ本文が長すぎる
    #[error("message body is too long ({actual} > {max} bytes)")]
    BodyTooLong { max: usize, actual: usize },
}

/// Repository 操作で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 参照先のロビーが存在しない
    #[error("lobby '{0}' not found")]
    LobbyNotFound(String),

    /// 同じ ID のロビーが既に存在する
    #[error("lobby '{0}' already exists")]
    DuplicateLobby(String),

    /// バックエンド（DB など）の失敗
    #[error("storage error: {0}")]
    Storage(String),
}

/// 試行回数内に重複しないロビー ID を生成できなかった
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to generate a unique lobby id after {attempts} attempts")]
pub struct GenerationExhausted {
    pub attempts: usize,
}
