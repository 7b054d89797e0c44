//! SQLite Lobby Repository 実装
//!
//! InMemory 実装と同じ振る舞いを SQL テーブルで実現します。
//!
//! ```text
//! DB Row → MessageRow / SenderRow (DTO) → Message / Sender (ドメインモデル)
//! ```
//!
//! メッセージ ID は `AUTOINCREMENT` で採番するため、削除が起きなくても再利用されません。

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    domain::{
        Lobby, LobbyId, LobbyRepository, Message, MessageBody, MessageId, RepositoryError,
        Sender, SenderName, Timestamp,
    },
    infrastructure::dto::row::{MessageRow, SenderRow},
};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS lobbies (
        id TEXT PRIMARY KEY NOT NULL,
        created_at INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS message (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        lobby_id TEXT NOT NULL REFERENCES lobbies(id),
        sender_name TEXT NOT NULL,
        body TEXT NOT NULL,
        timestamp INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS message_lobby_id ON message (lobby_id)",
    "CREATE TABLE IF NOT EXISTS sender (
        name TEXT NOT NULL,
        lobby_id TEXT NOT NULL REFERENCES lobbies(id),
        is_typing BOOLEAN NOT NULL DEFAULT FALSE,
        PRIMARY KEY (name, lobby_id)
    )",
];

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        RepositoryError::Storage(e.to_string())
    }
}

fn corrupt_row(e: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Storage(format!("corrupt row: {e}"))
}

/// SQLite Lobby Repository 実装
#[derive(Debug, Clone)]
pub struct SqliteLobbyRepository {
    pool: SqlitePool,
}

impl SqliteLobbyRepository {
    /// 既存のプールから作成（スキーマは作成しない）
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `database_url` に接続し、スキーマを作成する
    ///
    /// # Arguments
    ///
    /// * `database_url` - 例: `sqlite://chat.db?mode=rwc`
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let options: SqliteConnectOptions = database_url.parse()?;
        let pool = SqlitePoolOptions::new()
            .max_connections(16)
            .connect_with(options.foreign_keys(true))
            .await?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// テーブルがなければ作成する
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        for &statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
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
impl LobbyRepository for SqliteLobbyRepository {
    async fn lobby_exists(&self, id: &LobbyId) -> Result<bool, RepositoryError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lobbies WHERE id = ?")
                .bind(id.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    async fn create_lobby(
        &self,
        id: LobbyId,
        created_at: Timestamp,
    ) -> Result<Lobby, RepositoryError> {
        let result = sqlx::query("INSERT INTO lobbies (id, created_at) VALUES (?, ?)")
            .bind(id.as_str())
            .bind(created_at.value())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Lobby::new(id, created_at)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(RepositoryError::DuplicateLobby(id.into_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn append_message(
        &self,
        lobby_id: &LobbyId,
        sender_name: SenderName,
        body: MessageBody,
        timestamp: Timestamp,
    ) -> Result<Message, RepositoryError> {
        self.ensure_lobby(lobby_id).await?;

        let result = sqlx::query(
            "INSERT INTO message (lobby_id, sender_name, body, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(lobby_id.as_str())
        .bind(sender_name.as_str())
        .bind(body.as_str())
        .bind(timestamp.value())
        .execute(&self.pool)
        .await?;

        Ok(Message {
            id: MessageId::new(result.last_insert_rowid()),
            lobby_id: lobby_id.clone(),
            sender_name,
            body,
            timestamp,
        })
    }

    async fn messages_for(&self, lobby_id: &LobbyId) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            "SELECT id, lobby_id, sender_name, body, timestamp
             FROM message WHERE lobby_id = ? ORDER BY id",
        )
        .bind(lobby_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Message::try_from(row).map_err(corrupt_row))
            .collect()
    }

    async fn upsert_sender(
        &self,
        lobby_id: &LobbyId,
        name: SenderName,
    ) -> Result<bool, RepositoryError> {
        self.ensure_lobby(lobby_id).await?;

        let result = sqlx::query(
            "INSERT OR IGNORE INTO sender (name, lobby_id, is_typing) VALUES (?, ?, FALSE)",
        )
        .bind(name.as_str())
        .bind(lobby_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn senders_for(&self, lobby_id: &LobbyId) -> Result<Vec<Sender>, RepositoryError> {
        let rows = sqlx::query_as::<_, SenderRow>(
            "SELECT name, lobby_id, is_typing FROM sender WHERE lobby_id = ? ORDER BY rowid",
        )
        .bind(lobby_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Sender::try_from(row).map_err(corrupt_row))
            .collect()
    }

    async fn set_typing(
        &self,
        lobby_id: &LobbyId,
        name: &SenderName,
        is_typing: bool,
    ) -> Result<bool, RepositoryError> {
        // SQLite は値が変わらなくても一致した行数を返す
        let result = sqlx::query("UPDATE sender SET is_typing = ? WHERE lobby_id = ? AND name = ?")
            .bind(is_typing)
            .bind(lobby_id.as_str())
            .bind(name.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
