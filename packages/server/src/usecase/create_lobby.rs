//! UseCase: ロビー作成
//!
//! ロビーロックを保持したまま ID 生成と挿入を行い、同時作成でも ID が重複しないようにします。

use std::sync::Arc;

use chanoma_shared::time::Clock;

use crate::domain::{Lobby, LobbyIdGenerator, LobbyRepository, Timestamp};

use super::{error::CreateLobbyError, lock::WriteLocks};

/// ロビー作成のユースケース
pub struct CreateLobbyUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
    locks: Arc<WriteLocks>,
    clock: Arc<dyn Clock>,
    id_generator: LobbyIdGenerator,
}

impl CreateLobbyUseCase {
    /// 新しい CreateLobbyUseCase を作成
    pub fn new(
        repository: Arc<dyn LobbyRepository>,
        locks: Arc<WriteLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            locks,
            clock,
            id_generator: LobbyIdGenerator::new(),
        }
    }

    /// ID ジェネレータを差し替える
    pub fn with_id_generator(mut self, id_generator: LobbyIdGenerator) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// ロビー作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Lobby)` - 作成したロビー
    /// * `Err(CreateLobbyError::GenerationExhausted)` - 試行回数内に一意な ID を作れなかった
    pub async fn execute(&self) -> Result<Lobby, CreateLobbyError> {
        let _guard = self.locks.lobbies.lock().await;

        // 1. 既存ロビーと衝突しない ID を生成
        let repository = Arc::clone(&self.repository);
        let id = self
            .id_generator
            .generate(|candidate| {
                let repository = Arc::clone(&repository);
                async move {
                    repository
                        .lobby_exists(&candidate)
                        .await
                        .map_err(CreateLobbyError::from)
                }
            })
            .await?;

        // 2. ロビーを保存
        let created_at = Timestamp::new(self.clock.now_unix_secs());
        let lobby = self.repository.create_lobby(id, created_at).await?;

        Ok(lobby)
    }
}
