//! UseCase: メッセージ投稿
//!
//! 本文・送信者名・ロビー ID を検証してから、メッセージロックを保持したまま
//! 存在確認 → 追加 → ビュー構築を行います。返すビューには必ず今回の投稿が含まれます。

use std::sync::Arc;

use chanoma_shared::time::Clock;

use crate::domain::{LobbyId, LobbyRepository, LobbyView, MessageBody, SenderName, Timestamp};

use super::{error::PostMessageError, lock::WriteLocks, view_builder::LobbyViewBuilder};

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    view_builder: LobbyViewBuilder,
    locks: Arc<WriteLocks>,
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        locks: Arc<WriteLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            view_builder: LobbyViewBuilder::new(Arc::clone(&repository)),
            repository,
            locks,
            clock,
        }
    }

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `lobby_id` - 投稿先のロビー ID
    /// * `sender_name` - 送信者の表示名
    /// * `body` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok(LobbyView)` - 投稿後のロビービュー
    /// * `Err(PostMessageError)` - 検証失敗、または存在しないロビー
    pub async fn execute(
        &self,
        lobby_id: String,
        sender_name: String,
        body: String,
    ) -> Result<LobbyView, PostMessageError> {
        // 1. 入力検証（ストアに触れる前）
        let body = MessageBody::new(body)?;
        let sender_name = SenderName::new(sender_name)?;
        let lobby_id = LobbyId::new(lobby_id)?;

        let _guard = self.locks.messages.lock().await;

        // 2. ロビーの存在確認（ロビーロックは取らない）
        if !self.repository.lobby_exists(&lobby_id).await? {
            return Err(PostMessageError::UnknownLobby(lobby_id.into_string()));
        }

        // 3. サーバー時刻でメッセージを追加
        let timestamp = Timestamp::new(self.clock.now_unix_secs());
        self.repository
            .append_message(&lobby_id, sender_name, body, timestamp)
            .await?;

        // 4. 同じロック区間でビューを構築
        let view = self.view_builder.build(&lobby_id).await?;

        Ok(view)
    }
}
