//! インメモリ実装

mod lobby;

pub use lobby::InMemoryLobbyRepository;
