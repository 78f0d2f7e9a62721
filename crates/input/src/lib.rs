//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Arrow actions
//! are forwarded to the core as direction keys; pause and restart stay with
//! the host, which owns ticking and session setup.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
