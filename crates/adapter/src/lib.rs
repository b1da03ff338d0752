//! Adapter module - player commands in, replies out
//!
//! This module sits between input handling and the engine. It owns the one
//! policy the engine deliberately leaves open: what to do with commands
//! after the tower has toppled.
//!
//! # Command Handling
//!
//! | Command | Live game | After game over |
//! |---------|-----------|-----------------|
//! | place   | block drops, reply carries new stats | rejected |
//! | undo    | top block removed (never the foundation) | rejected |
//! | stats   | statistics report | statistics report |
//! | reset   | back to the initial state | back to the initial state |
//! | quit    | session finishes with final stats | session finishes |
//!
//! # Example Session Flow
//!
//! ```text
//! place -> Placed(stats)        block landed
//! place -> Toppled(stats)       block missed, game over latched
//! place -> Rejected(GameOver)   refused until reset
//! stats -> Report(stats)        always served
//! reset -> Reset                game over cleared
//! quit  -> Goodbye(stats)       session finished
//! ```
//!
//! Replies are plain data. Display wording lives with the views, so the
//! same session drives a full-screen terminal as well as tests.

pub mod session;

pub use tui_stacker_core as core;
pub use tui_stacker_types as types;

// Re-export session types for convenience
pub use session::{RejectReason, Reply, Session};
