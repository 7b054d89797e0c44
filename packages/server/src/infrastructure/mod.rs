//! Infrastructure 層
//!
//! Domain 層が定義する `LobbyRepository` の実装（インメモリ・SQLite）と、
//! HTTP / DB とのデータ変換（DTO）を提供します。

pub mod dto;
pub mod repository;
