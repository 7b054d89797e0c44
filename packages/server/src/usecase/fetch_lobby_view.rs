//! UseCase: ロビービュー取得（ポーリング）

use std::sync::Arc;

use crate::domain::{LobbyId, LobbyRepository, LobbyView};

use super::{error::FetchLobbyViewError, view_builder::LobbyViewBuilder};

/// ロビービュー取得のユースケース
pub struct FetchLobbyViewUseCase {
    view_builder: LobbyViewBuilder,
}

impl FetchLobbyViewUseCase {
    /// 新しい FetchLobbyViewUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self {
            view_builder: LobbyViewBuilder::new(repository),
        }
    }

    /// ロビービュー取得を実行
    pub async fn execute(&self, lobby_id: String) -> Result<LobbyView, FetchLobbyViewError> {
        // 形式が不正な ID のロビーは存在しえない
        let lobby_id = LobbyId::new(lobby_id.clone())
            .map_err(|_| FetchLobbyViewError::UnknownLobby(lobby_id))?;

        Ok(self.view_builder.build(&lobby_id).await?)
    }
}
