//! UseCase: ロビー存在確認

use std::sync::Arc;

use crate::domain::{LobbyId, LobbyRepository};

use super::error::LobbyExistsError;

/// ロビー存在確認のユースケース
pub struct LobbyExistsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn LobbyRepository>,
}

impl LobbyExistsUseCase {
    /// 新しい LobbyExistsUseCase を作成
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        Self { repository }
    }

    /// ロビー存在確認を実行（ロックは取らない）
    pub async fn execute(&self, lobby_id: String) -> Result<bool, LobbyExistsError> {
        let Ok(lobby_id) = LobbyId::new(lobby_id) else {
            return Ok(false);
        };

        Ok(self.repository.lobby_exists(&lobby_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RepositoryError, Timestamp, repository::MockLobbyRepository},
        infrastructure::repository::InMemoryLobbyRepository,
    };

    #[tokio::test]
    async fn test_lobby_exists() {
        // テスト項目: 作成済みのロビーは true、未作成・不正な ID は false
        // given (前提条件):
        let repository = Arc::new(InMemoryLobbyRepository::new());
        repository
            .create_lobby(LobbyId::new("abcxyz".to_string()).unwrap(), Timestamp::new(0))
            .await
            .unwrap();
        let usecase = LobbyExistsUseCase::new(repository);

        // when (操作):
        let existing = usecase.execute("abcxyz".to_string()).await;
        let missing = usecase.execute("zzzzzz".to_string()).await;
        let malformed = usecase.execute("abc".to_string()).await;

        // then (期待する結果):
        assert_eq!(existing, Ok(true));
        assert_eq!(missing, Ok(false));
        assert_eq!(malformed, Ok(false));
    }

    #[tokio::test]
    async fn test_lobby_exists_storage_failure() {
        // テスト項目: バックエンドの失敗は false ではなく Storage エラーとして返される
        // given (前提条件):
        let mut repository = MockLobbyRepository::new();
        repository
            .expect_lobby_exists()
            .returning(|_| Err(RepositoryError::Storage("no such table".to_string())));
        let usecase = LobbyExistsUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("abcxyz".to_string()).await;

        // then (期待する結果):
        assert!(matches!(result, Err(LobbyExistsError::Storage(_))));
    }
}
