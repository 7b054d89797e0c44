//! Utilities shared by the Chanoma binaries and libraries.

pub mod logger;
pub mod time;
