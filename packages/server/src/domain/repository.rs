//! Repository trait 定義
//!
//! ロビー・メッセージ・送信者の 3 つのコレクションを保持するデータストアの
//! インターフェース。インメモリ実装と SQLite 実装が同じ振る舞いで実装します。
//!
//! 各メソッドは同じコレクションに対する並行呼び出しに対してアトミック。
//! 複数ステップにまたがる操作（存在確認 → 追加 → ビュー構築）の直列化は
//! UseCase 層の `WriteLocks` が担当します。
//!
//! ロビー・メッセージ・送信者は削除されません。保持期間による削除を追加する場合は
//! `Lobby::created_at` を使うメソッドをこの trait に追加します。

use async_trait::async_trait;

use super::{Lobby, LobbyId, Message, MessageBody, RepositoryError, Sender, SenderName, Timestamp};

/// Lobby Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LobbyRepository: Send + Sync {
    /// ロビーが存在するか
    async fn lobby_exists(&self, id: &LobbyId) -> Result<bool, RepositoryError>;

    /// ロビーを作成
    ///
    /// 同じ ID が既にあれば `RepositoryError::DuplicateLobby`。
    async fn create_lobby(
        &self,
        id: LobbyId,
        created_at: Timestamp,
    ) -> Result<Lobby, RepositoryError>;

    /// メッセージを追加し、ID を採番する
    ///
    /// ロビーが存在しなければ `RepositoryError::LobbyNotFound`。
    async fn append_message(
        &self,
        lobby_id: &LobbyId,
        sender_name: SenderName,
        body: MessageBody,
        timestamp: Timestamp,
    ) -> Result<Message, RepositoryError>;

    /// ロビーのメッセージを挿入順で取得
    async fn messages_for(&self, lobby_id: &LobbyId) -> Result<Vec<Message>, RepositoryError>;

    /// 送信者を追加（既に存在すれば何もしない）
    ///
    /// 新規作成した場合 `true`。ロビーが存在しなければ `RepositoryError::LobbyNotFound`。
    async fn upsert_sender(
        &self,
        lobby_id: &LobbyId,
        name: SenderName,
    ) -> Result<bool, RepositoryError>;

    /// ロビーの送信者を取得
    async fn senders_for(&self, lobby_id: &LobbyId) -> Result<Vec<Sender>, RepositoryError>;

    /// 送信者の入力中フラグを更新
    ///
    /// 送信者が見つからなければ `false`（エラーではない）。
    async fn set_typing(
        &self,
        lobby_id: &LobbyId,
        name: &SenderName,
        is_typing: bool,
    ) -> Result<bool, RepositoryError>;
}
