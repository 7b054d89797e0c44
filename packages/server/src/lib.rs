//! Lobby chat server library.
//!
//! Clients create lobbies identified by short random codes, join them under a
//! display name, post messages and poll for the lobby view (messages, senders and
//! their typing flags).

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
