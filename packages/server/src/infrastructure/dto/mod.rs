//! Data Transfer Objects (DTOs) for the chat application.
//!
//! DTOs are organized by boundary:
//! - `http`: HTTP API request/response DTOs
//! - `row`: SQLite row DTOs

pub mod conversion;
pub mod http;
pub mod row;
