//! Shared types module - data structures and constants for the game suite
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (engine logic, terminal rendering, command
//! adapter).
//!
//! # Stacking Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BLOCK_WIDTH` | 10 | Width of the foundation block and the overlap base |
//! | `DEFAULT_MIN_BLOCK_WIDTH` | 3 | Lower clamp for a newly computed block width |
//! | `OFFSET_MIN` / `OFFSET_MAX` | -2 / 2 | Inclusive range of the random horizontal drift |
//! | `VISIBLE_WINDOW` | 5 | How many of the topmost blocks the display shows |
//! | `SCORE_PER_BLOCK` | 10 | Points per placement, multiplied by the level |
//! | `UNDO_PENALTY` | 10 | Points deducted when a block is removed |
//! | `BLOCKS_PER_LEVEL` | 5 | Stack growth needed to advance one level |
//!
//! # Commands
//!
//! The stacking game is driven by single-character commands, each mapped to
//! one engine operation:
//!
//! - `a`: place a block
//! - `u`: undo the last block
//! - `s`: show statistics
//! - `r`: reset the game
//! - `q`: quit
//!
//! # Examples
//!
//! ```
//! use tui_stacker_types::{Command, StackConfig, DEFAULT_BLOCK_WIDTH};
//!
//! let config = StackConfig::default();
//! assert_eq!(config.block_width, DEFAULT_BLOCK_WIDTH);
//!
//! assert_eq!(Command::from_char('a'), Some(Command::Place));
//! assert_eq!(Command::from_input("  Q\n"), Some(Command::Quit));
//! ```

/// Width of the first block, and the base width every overlap is computed from.
pub const DEFAULT_BLOCK_WIDTH: u32 = 10;

/// Lower clamp applied to every computed block width.
pub const DEFAULT_MIN_BLOCK_WIDTH: u32 = 3;

/// Smallest horizontal drift a new block can receive (inclusive).
pub const OFFSET_MIN: i32 = -2;

/// Largest horizontal drift a new block can receive (inclusive).
pub const OFFSET_MAX: i32 = 2;

/// Number of topmost blocks included in the render window.
pub const VISIBLE_WINDOW: usize = 5;

/// Base points awarded per placed block (scaled by the current level).
pub const SCORE_PER_BLOCK: u32 = 10;

/// Points deducted when the last block is undone (score never goes negative).
pub const UNDO_PENALTY: u32 = 10;

/// A new level starts every this-many stacked blocks.
pub const BLOCKS_PER_LEVEL: u32 = 5;

/// One placed block.
///
/// Immutable once created: `level` is the block's 1-based position in the
/// stack at the time it was placed and never changes afterwards, even when
/// the game level moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Horizontal offset of the block's left edge. May be negative.
    pub position: i32,
    /// Number of filled cells.
    pub width: u32,
    /// 1-based placement ordinal.
    pub level: u32,
}

/// Tunable stacking constants, fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    /// Width of the first block; also the base for the overlap computation
    /// and the left fall-off boundary (`position < -block_width` topples).
    pub block_width: u32,
    /// Lower clamp for computed widths. A value of 0 re-arms the otherwise
    /// unreachable `width <= 0` fall-off branch.
    pub min_block_width: u32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            block_width: DEFAULT_BLOCK_WIDTH,
            min_block_width: DEFAULT_MIN_BLOCK_WIDTH,
        }
    }
}

impl StackConfig {
    /// Read the configuration from environment variables.
    ///
    /// `STACKER_BLOCK_WIDTH` and `STACKER_MIN_BLOCK_WIDTH` override the
    /// defaults; unset or unparsable values fall back silently.
    pub fn from_env() -> Self {
        use std::env;

        let block_width = env::var("STACKER_BLOCK_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BLOCK_WIDTH);

        let min_block_width = env::var("STACKER_MIN_BLOCK_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MIN_BLOCK_WIDTH);

        Self {
            block_width,
            min_block_width,
        }
    }
}

/// Statistics snapshot returned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameStats {
    /// Current stack length.
    pub blocks_stacked: u32,
    /// Accumulated score. Never negative.
    pub score: u32,
    /// Current game level, starting at 1.
    pub level: u32,
    /// Latched once a placement topples; cleared only by reset.
    pub game_over: bool,
}

/// Player commands understood by the session adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Place a new block on the stack.
    Place,
    /// Remove the most recently placed block.
    Undo,
    /// Report the statistics snapshot.
    Stats,
    /// Return the game to its initial state.
    Reset,
    /// End the session.
    Quit,
}

impl Command {
    /// Parse a command from its single-character form (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Command::Place),
            'u' => Some(Command::Undo),
            's' => Some(Command::Stats),
            'r' => Some(Command::Reset),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }

    /// Parse a command from one line of input.
    ///
    /// The line is trimmed and must consist of exactly one command character;
    /// anything longer is rejected rather than guessed at.
    pub fn from_input(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// The canonical single-character form.
    pub fn as_char(&self) -> char {
        match self {
            Command::Place => 'a',
            Command::Undo => 'u',
            Command::Stats => 's',
            Command::Reset => 'r',
            Command::Quit => 'q',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StackConfig::default();
        assert_eq!(config.block_width, 10);
        assert_eq!(config.min_block_width, 3);
    }

    #[test]
    fn test_command_from_char() {
        assert_eq!(Command::from_char('a'), Some(Command::Place));
        assert_eq!(Command::from_char('U'), Some(Command::Undo));
        assert_eq!(Command::from_char('s'), Some(Command::Stats));
        assert_eq!(Command::from_char('R'), Some(Command::Reset));
        assert_eq!(Command::from_char('q'), Some(Command::Quit));
        assert_eq!(Command::from_char('x'), None);
        assert_eq!(Command::from_char(' '), None);
    }

    #[test]
    fn test_command_from_input_trims_and_lowercases() {
        assert_eq!(Command::from_input("  a \n"), Some(Command::Place));
        assert_eq!(Command::from_input("Q"), Some(Command::Quit));
        assert_eq!(Command::from_input(""), None);
        assert_eq!(Command::from_input("  "), None);
    }

    #[test]
    fn test_command_from_input_rejects_longer_words() {
        // A whole word is not a command, even when it starts with one.
        assert_eq!(Command::from_input("add"), None);
        assert_eq!(Command::from_input("quit"), None);
    }

    #[test]
    fn test_command_roundtrip() {
        for cmd in [
            Command::Place,
            Command::Undo,
            Command::Stats,
            Command::Reset,
            Command::Quit,
        ] {
            assert_eq!(Command::from_char(cmd.as_char()), Some(cmd));
        }
    }

    #[test]
    fn test_block_is_copy() {
        let b = Block {
            position: -2,
            width: 8,
            level: 3,
        };
        let c = b;
        assert_eq!(b, c);
    }
}
