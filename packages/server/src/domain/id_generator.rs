//! ロビー ID 生成
//!
//! 英小文字 6 文字の ID をランダムに生成し、既存 ID との衝突を呼び出し側の
//! 述語で確認します。試行回数には上限があり、超えた場合は `GenerationExhausted`。

use std::future::Future;

use rand::Rng;

use super::{
    error::GenerationExhausted,
    value_object::{LOBBY_ID_ALPHABET, LOBBY_ID_LENGTH, LobbyId},
};

/// ID 生成の最大試行回数
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// ロビー ID ジェネレータ
#[derive(Debug, Clone, Copy)]
pub struct LobbyIdGenerator {
    max_attempts: usize,
}

impl Default for LobbyIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LobbyIdGenerator {
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_GENERATION_ATTEMPTS)
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// 候補 ID を 1 つ生成（衝突チェックなし）
    pub fn random_candidate(&self) -> LobbyId {
        let mut rng = rand::rng();
        let value: String = (0..LOBBY_ID_LENGTH)
            .map(|_| LOBBY_ID_ALPHABET[rng.random_range(0..LOBBY_ID_ALPHABET.len())] as char)
            .collect();
        LobbyId::from_generated(value)
    }

    /// 既存 ID と衝突しない ID を生成
    ///
    /// # Arguments
    ///
    /// * `exists` - 候補 ID が既に使われているかを返す述語（Repository への問い合わせ）
    ///
    /// # Returns
    ///
    /// * `Ok(LobbyId)` - 衝突しない ID
    /// * `Err(E)` - 述語の失敗、または `GenerationExhausted` から変換したエラー
    pub async fn generate<F, Fut, E>(&self, mut exists: F) -> Result<LobbyId, E>
    where
        F: FnMut(LobbyId) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
        E: From<GenerationExhausted>,
    {
        for _ in 0..self.max_attempts {
            let candidate = self.random_candidate();
            if !exists(candidate.clone()).await? {
                return Ok(candidate);
            }
        }

        Err(GenerationExhausted {
            attempts: self.max_attempts,
        }
        .into())
    }
}
