//! Shared wiring for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chanoma_server::{
    domain::LobbyRepository,
    ui::Server,
    usecase::{
        CreateLobbyUseCase, EnterLobbyUseCase, FetchLobbyViewUseCase, LobbyExistsUseCase,
        PostMessageUseCase, SetTypingUseCase, WriteLocks,
    },
};
use chanoma_shared::time::{Clock, FixedClock};

pub const FIXED_NOW: i64 = 1_700_000_000;

/// All use cases wired to one repository, one lock set and a fixed clock
pub struct UseCases {
    pub create_lobby: Arc<CreateLobbyUseCase>,
    pub post_message: Arc<PostMessageUseCase>,
    pub enter_lobby: Arc<EnterLobbyUseCase>,
    pub set_typing: Arc<SetTypingUseCase>,
    pub lobby_exists: Arc<LobbyExistsUseCase>,
    pub fetch_lobby_view: Arc<FetchLobbyViewUseCase>,
}

impl UseCases {
    pub fn new(repository: Arc<dyn LobbyRepository>) -> Self {
        let locks = Arc::new(WriteLocks::new());
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(FIXED_NOW));
        Self {
            create_lobby: Arc::new(CreateLobbyUseCase::new(
                repository.clone(),
                locks.clone(),
                clock.clone(),
            )),
            post_message: Arc::new(PostMessageUseCase::new(
                repository.clone(),
                locks.clone(),
                clock,
            )),
            enter_lobby: Arc::new(EnterLobbyUseCase::new(repository.clone(), locks.clone())),
            set_typing: Arc::new(SetTypingUseCase::new(repository.clone(), locks)),
            lobby_exists: Arc::new(LobbyExistsUseCase::new(repository.clone())),
            fetch_lobby_view: Arc::new(FetchLobbyViewUseCase::new(repository)),
        }
    }

    pub fn into_server(self) -> Server {
        Server::new(
            self.create_lobby,
            self.post_message,
            self.enter_lobby,
            self.set_typing,
            self.lobby_exists,
            self.fetch_lobby_view,
        )
    }
}

/// Path of a fresh SQLite database file, removed when dropped
pub struct TempDatabase {
    path: std::path::PathBuf,
}

impl TempDatabase {
    pub fn new(tag: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "chanoma-{}-{}-{}.db",
            tag,
            std::process::id(),
            nanos
        ));
        Self { path }
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path.display())
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        for suffix in ["-wal", "-shm"] {
            let mut sidecar = self.path.clone().into_os_string();
            sidecar.push(suffix);
            let _ = std::fs::remove_file(sidecar);
        }
    }
}
