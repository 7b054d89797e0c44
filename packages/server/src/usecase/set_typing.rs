//! UseCase: 入力中フラグ更新

use std::sync::Arc;

use crate::domain::{LobbyId, LobbyRepository, SenderName};

use super::{error::SetTypingError, lock::WriteLocks};

/// 入力中フラグ更新のユースケース
pub struct SetTypingUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    locks: Arc<WriteLocks>,
}

impl SetTypingUseCase {
    /// 新しい SetTypingUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>, locks: Arc<WriteLocks>) -> Self {
        Self { repository, locks }
    }

    /// 入力中フラグ更新を実行
    ///
    /// 送信者が存在しない場合は作成せずに `SenderNotFound` を返す。
    /// 形式的にありえないロビー ID・名前も同様に `SenderNotFound`。
    pub async fn execute(
        &self,
        lobby_id: String,
        name: String,
        is_typing: bool,
    ) -> Result<(), SetTypingError> {
        let (Ok(parsed_lobby_id), Ok(parsed_name)) = (
            LobbyId::new(lobby_id.clone()),
            SenderName::new(name.clone()),
        ) else {
            return Err(SetTypingError::SenderNotFound { lobby_id, name });
        };

        let _guard = self.locks.senders.lock().await;

        let found = self
            .repository
            .set_typing(&parsed_lobby_id, &parsed_name, is_typing)
            .await?;
        if !found {
            return Err(SetTypingError::SenderNotFound { lobby_id, name });
        }

        Ok(())
    }
}
