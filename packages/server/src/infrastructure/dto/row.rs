//! SQLite row DTOs.
//!
//! DB の行をそのまま受け取る型。Domain Model への変換は `conversion` で検証付きで行う。

use sqlx::FromRow;

/// `message` テーブルの行
#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: i64,
    pub lobby_id: String,
    pub sender_name: String,
    pub body: String,
    pub timestamp: i64,
}

/// `sender` テーブルの行
#[derive(Debug, Clone, FromRow)]
pub struct SenderRow {
    pub name: String,
    pub lobby_id: String,
    pub is_typing: bool,
}
