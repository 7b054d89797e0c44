//! SQLite 実装

mod lobby;

pub use lobby::SqliteLobbyRepository;
