//! Domain 層
//!
//! ロビー・メッセージ・送信者のモデルと、それらを保持するデータストアの
//! インターフェース（`LobbyRepository`）を定義します。

pub mod entity;
pub mod error;
pub mod id_generator;
pub mod repository;
pub mod value_object;

pub use entity::{Lobby, LobbyView, Message, Sender};
pub use error::{GenerationExhausted, RepositoryError, ValueObjectError};
pub use id_generator::{LobbyIdGenerator, MAX_GENERATION_ATTEMPTS};
pub use repository::LobbyRepository;
pub use value_object::{
    LOBBY_ID_ALPHABET, LOBBY_ID_LENGTH, LobbyId, MAX_MESSAGE_BODY_LEN, MAX_SENDER_NAME_LEN,
    MessageBody, MessageId, SenderName, Timestamp,
};
