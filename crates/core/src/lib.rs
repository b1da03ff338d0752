//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the stacking rules, state management, and snapshot
//! plumbing. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Offset sequences can be scripted exactly
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation snapshot path for rendering
//!
//! # Module Structure
//!
//! - [`stack_game`]: The engine: placement, undo, scoring, game lifecycle
//! - [`rng`]: The [`RandomSource`] seam, a seeded LCG, and a scripted source
//! - [`snapshot`]: Render-ready view of the stack for display code
//!
//! # Game Rules
//!
//! - The foundation block lands flush at position 0 with the full base width
//! - Every later block drifts by a random offset in `[-2, 2]` and keeps the
//!   overlap width, clamped from below by the minimum block width
//! - A block that drifts strictly past `-block_width` topples the tower
//! - Each placement scores 10 points times the current level
//! - The level advances every 5 stacked blocks
//! - Undo removes the top block for 10 points, but never the foundation
//!
//! # Example
//!
//! ```
//! use tui_stacker_core::StackGame;
//!
//! let mut game = StackGame::new(12345);
//! game.place_block();
//!
//! let stats = game.stats();
//! assert_eq!(stats.blocks_stacked, 1);
//! assert_eq!(stats.score, 10);
//! assert_eq!(stats.level, 1);
//! assert!(!stats.game_over);
//! ```

pub mod rng;
pub mod snapshot;
pub mod stack_game;

pub use tui_stacker_types as types;

// Re-export commonly used types for convenience
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::StackSnapshot;
pub use stack_game::StackGame;
