//! HTTP handlers.

mod error;
mod http;

pub use http::{
    create_lobby, enter_lobby, fetch_lobby_view, health_check, lobby_exists, post_message,
    update_typing,
};
