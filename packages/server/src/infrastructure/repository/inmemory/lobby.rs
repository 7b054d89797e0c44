//! InMemory Lobby Repository 実装
//!
//! ロビー・メッセージ・送信者をそれぞれ独立した Mutex で保護します。
//! 1 つのメソッドが同時に保持するロックは常に 1 つだけです（存在確認のロックは
//! 対象コレクションのロックを取る前に解放する）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Lobby, LobbyId, LobbyRepository, Message, MessageBody, MessageId, RepositoryError, Sender,
    SenderName, Timestamp,
};

/// メッセージ表（ロビーごとの挿入順リスト + ストア全体の採番カウンタ）
#[derive(Debug, Default)]
struct MessageTable {
    by_lobby: HashMap<LobbyId, Vec<Message>>,
    last_id: i64,
}

/// インメモリ Lobby Repository 実装
#[derive(Debug, Default)]
pub struct InMemoryLobbyRepository {
    lobbies: Mutex<HashMap<LobbyId, Lobby>>,
    messages: Mutex<MessageTable>,
    senders: Mutex<HashMap<LobbyId, Vec<Sender>>>,
}

impl InMemoryLobbyRepository {
    /// 空の InMemoryLobbyRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    async fn ensure_lobby(&self, lobby_id: &LobbyId) -> Result<(), RepositoryError> {
        if self.lobby_exists(lobby_id).await? {
            Ok(())
        } else {
            Err(RepositoryError::LobbyNotFound(lobby_id.to_string()))
        }
    }
}

#[async_trait]
impl LobbyRepository for InMemoryLobbyRepository {
    async fn lobby_exists(&self, id: &LobbyId) -> Result<bool, RepositoryError> {
        let lobbies = self.lobbies.lock().await;
        Ok(lobbies.contains_key(id))
    }

    async fn create_lobby(
        &self,
        id: LobbyId,
        created_at: Timestamp,
    ) -> Result<Lobby, RepositoryError> {
        let mut lobbies = self.lobbies.lock().await;
        if lobbies.contains_key(&id) {
            return Err(RepositoryError::DuplicateLobby(id.into_string()));
        }

        let lobby = Lobby::new(id.clone(), created_at);
        lobbies.insert(id, lobby.clone());
        Ok(lobby)
    }

    async fn append_message(
        &self,
        lobby_id: &LobbyId,
        sender_name: SenderName,
        body: MessageBody,
        timestamp: Timestamp,
    ) -> Result<Message, RepositoryError> {
        // ロビーは削除されないので、確認後にロックを取り直しても整合性は崩れない
        self.ensure_lobby(lobby_id).await?;

        let mut table = self.messages.lock().await;
        table.last_id += 1;
        let message = Message {
            id: MessageId::new(table.last_id),
            lobby_id: lobby_id.clone(),
            sender_name,
            body,
            timestamp,
        };
        table
            .by_lobby
            .entry(lobby_id.clone())
            .or_default()
            .push(message.clone());

        Ok(message)
    }

    async fn messages_for(&self, lobby_id: &LobbyId) -> Result<Vec<Message>, RepositoryError> {
        let table = self.messages.lock().await;
        Ok(table.by_lobby.get(lobby_id).cloned().unwrap_or_default())
    }

    async fn upsert_sender(
        &self,
        lobby_id: &LobbyId,
        name: SenderName,
    ) -> Result<bool, RepositoryError> {
        self.ensure_lobby(lobby_id).await?;

        let mut senders = self.senders.lock().await;
        let lobby_senders = senders.entry(lobby_id.clone()).or_default();
        if lobby_senders.iter().any(|s| s.name == name) {
            return Ok(false);
        }

        lobby_senders.push(Sender::new(name, lobby_id.clone()));
        Ok(true)
    }

    async fn senders_for(&self, lobby_id: &LobbyId) -> Result<Vec<Sender>, RepositoryError> {
        let senders = self.senders.lock().await;
        Ok(senders.get(lobby_id).cloned().unwrap_or_default())
    }

    async fn set_typing(
        &self,
        lobby_id: &LobbyId,
        name: &SenderName,
        is_typing: bool,
    ) -> Result<bool, RepositoryError> {
        let mut senders = self.senders.lock().await;
        let sender = senders
            .get_mut(lobby_id)
            .and_then(|lobby_senders| lobby_senders.iter_mut().find(|s| &s.name == name));

        match sender {
            Some(sender) => {
                sender.is_typing = is_typing;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::contract;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - LobbyRepository の共通契約（contract モジュール）をインメモリ実装で満たすこと
    //
    // 【なぜこのテストが必要か】
    // - SQLite 実装と同じ振る舞いであることを、同じテストで保証する
    // ========================================

    #[tokio::test]
    async fn test_create_and_check_lobby() {
        contract::create_and_check_lobby(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_duplicate_lobby_is_rejected() {
        contract::duplicate_lobby_is_rejected(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_message_ids_are_store_wide_and_increasing() {
        contract::message_ids_are_store_wide_and_increasing(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_append_to_unknown_lobby_creates_nothing() {
        contract::append_to_unknown_lobby_creates_nothing(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_upsert_sender_is_idempotent() {
        contract::upsert_sender_is_idempotent(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_upsert_sender_to_unknown_lobby_creates_nothing() {
        contract::upsert_sender_to_unknown_lobby_creates_nothing(&InMemoryLobbyRepository::new())
            .await;
    }

    #[tokio::test]
    async fn test_same_name_in_two_lobbies_is_two_senders() {
        contract::same_name_in_two_lobbies_is_two_senders(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_set_typing_reports_absent_sender() {
        contract::set_typing_reports_absent_sender(&InMemoryLobbyRepository::new()).await;
    }

    #[tokio::test]
    async fn test_senders_keep_insertion_order() {
        contract::senders_keep_insertion_order(&InMemoryLobbyRepository::new()).await;
    }
}
