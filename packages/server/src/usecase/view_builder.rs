//! Lobby View Builder
//!
//! ロビーの存在を確認してから、メッセージと送信者を個別に取得して 1 つのビューに
//! まとめます。コレクションをまたいだアトミック性はありません（並行して投稿された
//! メッセージが含まれるかどうかは保証しない）。

use std::sync::Arc;

use crate::domain::{LobbyId, LobbyRepository, LobbyView, RepositoryError};

#[derive(Clone)]
pub struct LobbyViewBuilder {
    repository: Arc<dyn LobbyRepository>,
}

impl LobbyViewBuilder {
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// ロビービューを構築
    ///
    /// 存在しないロビーに対しては空のビューではなく `RepositoryError::LobbyNotFound` を返す。
    pub async fn build(&self, lobby_id: &LobbyId) -> Result<LobbyView, RepositoryError> {
        if !self.repository.lobby_exists(lobby_id).await? {
            return Err(RepositoryError::LobbyNotFound(lobby_id.to_string()));
        }

        let messages = self.repository.messages_for(lobby_id).await?;
        let senders = self.repository.senders_for(lobby_id).await?;

        Ok(LobbyView {
            id: lobby_id.clone(),
            messages,
            senders,
        })
    }
}
