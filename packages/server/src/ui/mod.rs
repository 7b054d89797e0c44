//! HTTP transport for the lobby chat server.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
