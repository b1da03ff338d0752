//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values for the
//! full-screen terminal game.

pub mod map;

pub use tui_stacker_types as types;

pub use map::{handle_key_event, should_quit};
