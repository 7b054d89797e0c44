//! Entity 定義

use super::value_object::{LobbyId, MessageBody, MessageId, SenderName, Timestamp};

/// ロビー（チャットルーム）
///
/// 作成後に変更・削除されることはない。`created_at` は将来の保持期間ポリシー用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lobby {
    pub id: LobbyId,
    pub created_at: Timestamp,
}

impl Lobby {
    pub fn new(id: LobbyId, created_at: Timestamp) -> Self {
        Self { id, created_at }
    }
}

/// ロビーに投稿されたメッセージ（不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub lobby_id: LobbyId,
    pub sender_name: SenderName,
    pub body: MessageBody,
    /// サーバー側で付与した投稿時刻
    pub timestamp: Timestamp,
}

/// ロビーの参加者
///
/// (name, lobby_id) の組で一意。変更できるのは `is_typing` のみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub name: SenderName,
    pub lobby_id: LobbyId,
    pub is_typing: bool,
}

impl Sender {
    /// 新規参加者を作成（入力中フラグは false）
    pub fn new(name: SenderName, lobby_id: LobbyId) -> Self {
        Self {
            name,
            lobby_id,
            is_typing: false,
        }
    }
}

/// クライアントに返すロビーのスナップショット（永続化しない集約）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyView {
    pub id: LobbyId,
    /// 挿入順
    pub messages: Vec<Message>,
    pub senders: Vec<Sender>,
}
