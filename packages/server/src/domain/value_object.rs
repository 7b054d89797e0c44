//! Value Object 定義
//!
//! 生成時に不変条件（長さ・文字種）を検証し、検証済みの値だけを Domain に流します。

use std::fmt;

use super::error::ValueObjectError;

/// ロビー ID の長さ
pub const LOBBY_ID_LENGTH: usize = 6;
/// ロビー ID に使う文字
pub const LOBBY_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// 送信者名の最大バイト数（UTF-8）
pub const MAX_SENDER_NAME_LEN: usize = 32;
/// メッセージ本文の最大バイト数（UTF-8）
pub const MAX_MESSAGE_BODY_LEN: usize = 512;

/// ロビー ID（英小文字 6 文字）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LobbyId(String);

impl LobbyId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let well_formed = value.len() == LOBBY_ID_LENGTH
            && value.bytes().all(|b| LOBBY_ID_ALPHABET.contains(&b));
        if !well_formed {
            return Err(ValueObjectError::InvalidLobbyId(value));
        }
        Ok(Self(value))
    }

    /// 検証を省略して生成する（`LobbyIdGenerator` 専用）
    pub(crate) fn from_generated(value: String) -> Self {
        debug_assert_eq!(value.len(), LOBBY_ID_LENGTH);
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 送信者の表示名（最大 32 バイト）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SenderName(String);

impl SenderName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let actual = value.len();
        if actual > MAX_SENDER_NAME_LEN {
            return Err(ValueObjectError::NameTooLong {
                max: MAX_SENDER_NAME_LEN,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// メッセージ本文（最大 512 バイト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let actual = value.len();
        if actual > MAX_MESSAGE_BODY_LEN {
            return Err(ValueObjectError::BodyTooLong {
                max: MAX_MESSAGE_BODY_LEN,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// メッセージ ID（ストア全体で単調増加）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(i64);

impl MessageId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Unix タイムスタンプ（秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
