//! Snapshot module - render-ready view of the stack
//!
//! Views and adapters read snapshots instead of borrowing the engine, which
//! keeps rendering decoupled from game mutation. Snapshots are reused across
//! frames through [`StackGame::snapshot_into`](crate::StackGame::snapshot_into)
//! so the render path stays allocation-free.

use arrayvec::ArrayVec;

use crate::types::{Block, DEFAULT_BLOCK_WIDTH, VISIBLE_WINDOW};

/// Everything the display needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackSnapshot {
    /// Visible window of the stack, oldest first. At most
    /// [`VISIBLE_WINDOW`] entries; the last entry is the top of the tower.
    pub blocks: ArrayVec<Block, VISIBLE_WINDOW>,
    /// How many older blocks fell outside the window.
    pub hidden: u32,
    /// Full stack length, window included.
    pub blocks_stacked: u32,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    /// Foundation width, for sizing the tower column.
    pub block_width: u32,
}

impl StackSnapshot {
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.hidden = 0;
        self.blocks_stacked = 0;
        self.score = 0;
        self.level = 1;
        self.game_over = false;
        self.block_width = DEFAULT_BLOCK_WIDTH;
    }
}

impl Default for StackSnapshot {
    fn default() -> Self {
        let mut s = Self {
            blocks: ArrayVec::new(),
            hidden: 0,
            blocks_stacked: 0,
            score: 0,
            level: 1,
            game_over: false,
            block_width: DEFAULT_BLOCK_WIDTH,
        };
        s.clear();
        s
    }
}
