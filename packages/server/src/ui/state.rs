//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    CreateLobbyUseCase, EnterLobbyUseCase, FetchLobbyViewUseCase, LobbyExistsUseCase,
    PostMessageUseCase, SetTypingUseCase,
};

/// Shared application state
pub struct AppState {
    /// CreateLobbyUseCase（ロビー作成のユースケース）
    pub create_lobby_usecase: Arc<CreateLobbyUseCase>,
    /// PostMessageUseCase（メッセージ投稿のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// EnterLobbyUseCase（ロビー入室のユースケース）
    pub enter_lobby_usecase: Arc<EnterLobbyUseCase>,
    /// SetTypingUseCase（入力中フラグ更新のユースケース）
    pub set_typing_usecase: Arc<SetTypingUseCase>,
    /// LobbyExistsUseCase（ロビー存在確認のユースケース）
    pub lobby_exists_usecase: Arc<LobbyExistsUseCase>,
    /// FetchLobbyViewUseCase（ロビービュー取得のユースケース）
    pub fetch_lobby_view_usecase: Arc<FetchLobbyViewUseCase>,
}
