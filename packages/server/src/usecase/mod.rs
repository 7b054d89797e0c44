//! UseCase 層
//!
//! Lobby Service の各操作を 1 つのユースケースとして実装します。
//! 入力検証はストアに触れる前に行い、書き込みを伴う複合操作は `WriteLocks` で直列化します。

mod create_lobby;
mod enter_lobby;
pub mod error;
mod fetch_lobby_view;
mod lobby_exists;
mod lock;
mod post_message;
mod set_typing;
mod view_builder;

pub use create_lobby::CreateLobbyUseCase;
pub use enter_lobby::EnterLobbyUseCase;
pub use error::{
    CreateLobbyError, EnterLobbyError, FetchLobbyViewError, LobbyExistsError, PostMessageError,
    SetTypingError,
};
pub use fetch_lobby_view::FetchLobbyViewUseCase;
pub use lobby_exists::LobbyExistsUseCase;
pub use lock::WriteLocks;
pub use post_message::PostMessageUseCase;
pub use set_typing::SetTypingUseCase;
pub use view_builder::LobbyViewBuilder;
