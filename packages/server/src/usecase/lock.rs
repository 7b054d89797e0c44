//! コレクションごとの書き込みロック

use tokio::sync::Mutex;

/// ロビー・メッセージ・送信者の各コレクションに 1 つずつの排他ロック
///
/// 複合操作は対象コレクションのロックを操作の最後（ビュー構築まで）保持する。
/// 2 つのロックを同時に取ることはない。存在確認はロックを取らない読み取り。
#[derive(Debug, Default)]
pub struct WriteLocks {
    pub(crate) lobbies: Mutex<()>,
    pub(crate) messages: Mutex<()>,
    pub(crate) senders: Mutex<()>,
}

impl WriteLocks {
    pub fn new() -> Self {
        Self::default()
    }
}
