//! Repository 実装
//!
//! - `inmemory`: プロセス内のコレクションを使う実装
//! - `sqlite`: sqlx + SQLite を使う実装（プロセス再起動後もデータが残る）
//!
//! 両者は同じ振る舞いを持ち、`contract` のテストを共通で通します。

pub mod inmemory;
pub mod sqlite;

#[cfg(test)]
pub(crate) mod contract;

pub use inmemory::InMemoryLobbyRepository;
pub use sqlite::SqliteLobbyRepository;
