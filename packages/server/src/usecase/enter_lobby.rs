//! UseCase: ロビー入室
//!
//! 同じ名前で何度入室しても送信者は 1 件のまま（入力中フラグも維持）。

use std::sync::Arc;

use crate::domain::{LobbyId, LobbyRepository, LobbyView, SenderName};

use super::{error::EnterLobbyError, lock::WriteLocks, view_builder::LobbyViewBuilder};

/// ロビー入室のユースケース
pub struct EnterLobbyUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    view_builder: LobbyViewBuilder,
    locks: Arc<WriteLocks>,
}

impl EnterLobbyUseCase {
    /// 新しい EnterLobbyUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>, locks: Arc<WriteLocks>) -> Self {
        Self {
            view_builder: LobbyViewBuilder::new(Arc::clone(&repository)),
            repository,
            locks,
        }
    }

    /// ロビー入室を実行
    ///
    /// # Returns
    ///
    /// * `Ok(LobbyView)` - 入室後のロビービュー（自分が送信者に含まれる）
    /// * `Err(EnterLobbyError)` - 名前が長すぎる、または存在しないロビー
    pub async fn execute(
        &self,
        lobby_id: String,
        name: String,
    ) -> Result<LobbyView, EnterLobbyError> {
        let name = SenderName::new(name)?;
        let lobby_id = LobbyId::new(lobby_id)?;

        let _guard = self.locks.senders.lock().await;

        if !self.repository.lobby_exists(&lobby_id).await? {
            return Err(EnterLobbyError::UnknownLobby(lobby_id.into_string()));
        }

        self.repository.upsert_sender(&lobby_id, name).await?;

        let view = self.view_builder.build(&lobby_id).await?;

        Ok(view)
    }
}
