//! Stacking engine - block placement, undo, scoring, and game lifecycle
//!
//! The engine owns the block stack and applies one rule set: each new block
//! drifts sideways from the one below it, keeps only the overlap width, and
//! topples the game when it misses the stack. Commands arrive through plain
//! method calls; the engine performs no I/O and never blocks.

use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::StackSnapshot;
use crate::types::*;

/// Complete stacking game state
///
/// All fields are private; readers go through the getter methods or take a
/// [`StackSnapshot`]. The engine itself never refuses a placement after
/// game over. Whether to keep playing a toppled stack is the caller's call.
#[derive(Debug)]
pub struct StackGame {
    config: StackConfig,
    blocks: Vec<Block>,
    score: u32,
    level: u32,
    game_over: bool,
    rng: Box<dyn RandomSource>,
}

impl StackGame {
    /// Create a new game with the given RNG seed and default configuration
    pub fn new(seed: u32) -> Self {
        Self::with_source(StackConfig::default(), Box::new(SimpleRng::new(seed)))
    }

    /// Create a new game with an explicit configuration
    pub fn with_config(config: StackConfig, seed: u32) -> Self {
        Self::with_source(config, Box::new(SimpleRng::new(seed)))
    }

    /// Create a new game drawing offsets from the given source
    pub fn with_source(config: StackConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            blocks: Vec::new(),
            score: 0,
            level: 1,
            game_over: false,
            rng,
        }
    }

    /// Drop the next block onto the stack.
    ///
    /// The foundation block lands flush at position 0 and consumes no
    /// randomness. Every later block drifts from the current top by an
    /// offset in `[OFFSET_MIN, OFFSET_MAX]`, keeping the overlap width
    /// clamped from below by `min_block_width`.
    ///
    /// Returns `false` when the block misses the stack. That latches
    /// `game_over`; only [`reset`](Self::reset) clears it.
    pub fn place_block(&mut self) -> bool {
        let block = match self.blocks.last() {
            None => Block {
                position: 0,
                width: self.config.block_width,
                level: 1,
            },
            Some(top) => {
                let offset = self.rng.next_in_range(OFFSET_MIN, OFFSET_MAX);
                let position = top.position + offset;
                let width = (self.config.block_width as i32 - offset.abs())
                    .max(self.config.min_block_width as i32);

                // Lost blocks: shrunk to nothing, or drifted strictly past
                // the left boundary. Positions to the right are unbounded.
                if width <= 0 || position < -(self.config.block_width as i32) {
                    self.game_over = true;
                    return false;
                }

                Block {
                    position,
                    width: width as u32,
                    level: self.blocks.len() as u32 + 1,
                }
            }
        };

        self.blocks.push(block);
        // Points are awarded at the level in effect before this placement;
        // the level then advances from the new stack height.
        self.score += SCORE_PER_BLOCK * self.level;
        self.level = self.blocks.len() as u32 / BLOCKS_PER_LEVEL + 1;
        true
    }

    /// Remove the most recently placed block.
    ///
    /// The foundation block is never removed. Undoing costs
    /// [`UNDO_PENALTY`] points (the score floors at zero) and leaves the
    /// level untouched, even when the removal crosses a level boundary.
    pub fn undo_last_block(&mut self) -> bool {
        if self.blocks.len() <= 1 {
            return false;
        }
        self.blocks.pop();
        self.score = self.score.saturating_sub(UNDO_PENALTY);
        true
    }

    /// Current statistics snapshot.
    pub fn stats(&self) -> GameStats {
        GameStats {
            blocks_stacked: self.blocks.len() as u32,
            score: self.score,
            level: self.level,
            game_over: self.game_over,
        }
    }

    /// Return to the initial state.
    ///
    /// Keeps the configuration and the random source; the offset stream
    /// continues where it left off rather than restarting.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.score = 0;
        self.level = 1;
        self.game_over = false;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn blocks_stacked(&self) -> u32 {
        self.blocks.len() as u32
    }

    pub fn config(&self) -> StackConfig {
        self.config
    }

    /// Every block in the stack, oldest first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The topmost blocks, oldest first, at most [`VISIBLE_WINDOW`] of them.
    pub fn visible_blocks(&self) -> &[Block] {
        let start = self.blocks.len().saturating_sub(VISIBLE_WINDOW);
        &self.blocks[start..]
    }

    /// Write the render snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut StackSnapshot) {
        out.blocks.clear();
        for block in self.visible_blocks() {
            out.blocks.push(*block);
        }
        out.hidden = (self.blocks.len() - out.blocks.len()) as u32;
        out.blocks_stacked = self.blocks.len() as u32;
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.game_over;
        out.block_width = self.config.block_width;
    }

    pub fn snapshot(&self) -> StackSnapshot {
        let mut s = StackSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn scripted(config: StackConfig, script: Vec<i32>) -> StackGame {
        StackGame::with_source(config, Box::new(ScriptedRng::new(script)))
    }

    #[test]
    fn test_foundation_block() {
        let mut game = StackGame::new(1);
        assert!(game.place_block());

        assert_eq!(game.blocks_stacked(), 1);
        assert_eq!(game.score(), 10);
        assert_eq!(game.level(), 1);
        assert_eq!(
            game.blocks()[0],
            Block {
                position: 0,
                width: 10,
                level: 1,
            }
        );
    }

    #[test]
    fn test_foundation_consumes_no_randomness() {
        // First scripted value must land on the second placement.
        let mut game = scripted(StackConfig::default(), vec![2]);
        game.place_block();
        game.place_block();
        assert_eq!(game.blocks()[1].position, 2);
    }

    #[test]
    fn test_offset_drifts_from_previous_top() {
        let mut game = scripted(StackConfig::default(), vec![2, -1, 0]);
        for _ in 0..4 {
            assert!(game.place_block());
        }
        let positions: Vec<i32> = game.blocks().iter().map(|b| b.position).collect();
        assert_eq!(positions, vec![0, 2, 1, 1]);
    }

    #[test]
    fn test_width_shrinks_by_drift_magnitude() {
        let mut game = scripted(StackConfig::default(), vec![-2, 0, 1]);
        for _ in 0..4 {
            assert!(game.place_block());
        }
        let widths: Vec<u32> = game.blocks().iter().map(|b| b.width).collect();
        assert_eq!(widths, vec![10, 8, 10, 9]);
    }

    #[test]
    fn test_every_offset_lands_under_default_config() {
        // Under the default clamp no drift can shrink a block away; widths
        // stay in {8, 9, 10} for every possible offset.
        for offset in OFFSET_MIN..=OFFSET_MAX {
            let mut game = scripted(StackConfig::default(), vec![offset]);
            game.place_block();
            assert!(game.place_block(), "offset {} toppled", offset);
            let width = game.blocks()[1].width;
            assert!((8..=10).contains(&width), "offset {} width {}", offset, width);
        }
    }

    #[test]
    fn test_min_width_clamp_binds() {
        let config = StackConfig {
            block_width: 4,
            min_block_width: 3,
        };
        let mut game = scripted(config, vec![-2]);
        game.place_block();
        assert!(game.place_block());
        // Overlap would be 2; the clamp lifts it back to 3.
        assert_eq!(game.blocks()[1].width, 3);
    }

    #[test]
    fn test_score_and_level_progression() {
        let mut game = scripted(StackConfig::default(), vec![0]);

        for _ in 0..5 {
            assert!(game.place_block());
        }
        assert_eq!(game.score(), 50);
        assert_eq!(game.level(), 2);

        for _ in 0..5 {
            assert!(game.place_block());
        }
        assert_eq!(game.score(), 150);
        assert_eq!(game.level(), 3);
    }

    #[test]
    fn test_block_level_is_placement_ordinal() {
        let mut game = scripted(StackConfig::default(), vec![0]);
        for _ in 0..7 {
            game.place_block();
        }
        for (i, block) in game.blocks().iter().enumerate() {
            assert_eq!(block.level, i as u32 + 1);
        }
    }

    #[test]
    fn test_leftward_drift_topples_past_boundary() {
        let mut game = scripted(StackConfig::default(), vec![-2]);

        // Foundation plus five full drifts reach position -10, still alive.
        for _ in 0..6 {
            assert!(game.place_block());
        }
        assert_eq!(game.blocks()[5].position, -10);
        assert!(!game.game_over());

        // The next drift lands at -12, strictly past -block_width.
        assert!(!game.place_block());
        assert!(game.game_over());
        assert_eq!(game.blocks_stacked(), 6);
        assert_eq!(game.score(), 70);
        assert_eq!(game.level(), 2);
    }

    #[test]
    fn test_rightward_drift_never_topples() {
        let mut game = scripted(StackConfig::default(), vec![2]);
        for _ in 0..50 {
            assert!(game.place_block());
        }
        assert!(!game.game_over());
        assert_eq!(game.blocks()[49].position, 98);
    }

    #[test]
    fn test_zero_min_width_rearms_width_fall_off() {
        // With the clamp disabled and a narrow base, a full drift shrinks
        // the block to width 0 before it reaches the position boundary.
        let config = StackConfig {
            block_width: 1,
            min_block_width: 0,
        };
        let mut game = scripted(config, vec![2]);
        assert!(game.place_block());
        assert!(!game.place_block());
        assert!(game.game_over());
        assert_eq!(game.blocks_stacked(), 1);
    }

    #[test]
    fn test_game_over_latches_through_later_placements() {
        let mut game = scripted(StackConfig::default(), vec![-2, -2, -2, -2, -2, -2, 0]);
        for _ in 0..6 {
            game.place_block();
        }
        assert!(!game.place_block());
        assert!(game.game_over());

        // The engine still accepts placements, but the latch stays set.
        assert!(game.place_block());
        assert!(game.game_over());
        assert_eq!(game.blocks_stacked(), 7);
    }

    #[test]
    fn test_stats_is_a_pure_read() {
        let mut game = scripted(StackConfig::default(), vec![1]);
        for _ in 0..3 {
            game.place_block();
        }

        let first = game.stats();
        let second = game.stats();
        assert_eq!(first, second);
        assert_eq!(game.blocks_stacked(), 3);
    }

    #[test]
    fn test_single_block_round_trip() {
        let mut game = StackGame::new(7);

        assert!(game.place_block());
        assert_eq!(game.score(), 10);

        // Undo refuses the foundation and leaves everything alone.
        assert!(!game.undo_last_block());
        assert_eq!(game.score(), 10);
        assert_eq!(game.blocks_stacked(), 1);

        game.reset();
        assert_eq!(
            game.stats(),
            GameStats {
                blocks_stacked: 0,
                score: 0,
                level: 1,
                game_over: false,
            }
        );
    }

    #[test]
    fn test_undo_on_empty_stack() {
        let mut game = StackGame::new(1);
        assert!(!game.undo_last_block());
        assert_eq!(game.stats().score, 0);
    }

    #[test]
    fn test_undo_never_removes_foundation() {
        let mut game = StackGame::new(1);
        game.place_block();
        assert!(!game.undo_last_block());
        assert_eq!(game.blocks_stacked(), 1);
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn test_undo_pops_and_deducts() {
        let mut game = scripted(StackConfig::default(), vec![1]);
        game.place_block();
        game.place_block();
        assert_eq!(game.score(), 20);

        assert!(game.undo_last_block());
        assert_eq!(game.blocks_stacked(), 1);
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn test_undo_leaves_level_behind() {
        let mut game = scripted(StackConfig::default(), vec![0]);
        for _ in 0..5 {
            game.place_block();
        }
        assert_eq!(game.level(), 2);

        // Dropping back to four blocks does not re-derive the level.
        assert!(game.undo_last_block());
        assert_eq!(game.blocks_stacked(), 4);
        assert_eq!(game.level(), 2);
    }

    #[test]
    fn test_undo_does_not_rewind_the_offset_stream() {
        let mut game = scripted(StackConfig::default(), vec![1, -1]);
        game.place_block();
        game.place_block();
        assert_eq!(game.blocks()[1].position, 1);

        game.undo_last_block();
        game.place_block();
        // The replacement drew the next scripted offset, not a replay.
        assert_eq!(game.blocks()[1].position, -1);
    }

    #[test]
    fn test_reset_clears_state_and_keeps_config() {
        let config = StackConfig {
            block_width: 6,
            min_block_width: 2,
        };
        let mut game = scripted(config, vec![-2]);
        for _ in 0..4 {
            game.place_block();
        }
        game.reset();

        let stats = game.stats();
        assert_eq!(stats.blocks_stacked, 0);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert!(!stats.game_over);
        assert!(game.blocks().is_empty());

        game.place_block();
        assert_eq!(game.blocks()[0].width, 6);
    }

    #[test]
    fn test_reset_clears_game_over() {
        let config = StackConfig {
            block_width: 1,
            min_block_width: 0,
        };
        let mut game = scripted(config, vec![2]);
        game.place_block();
        game.place_block();
        assert!(game.game_over());

        game.reset();
        assert!(!game.game_over());
        assert!(game.place_block());
    }

    #[test]
    fn test_seeded_games_reproduce() {
        let mut a = StackGame::new(20240817);
        let mut b = StackGame::new(20240817);
        for _ in 0..30 {
            assert_eq!(a.place_block(), b.place_block());
        }
        assert_eq!(a.blocks(), b.blocks());
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_visible_blocks_windows_the_top() {
        let mut game = scripted(StackConfig::default(), vec![0]);
        for _ in 0..3 {
            game.place_block();
        }
        assert_eq!(game.visible_blocks().len(), 3);

        for _ in 0..4 {
            game.place_block();
        }
        let visible = game.visible_blocks();
        assert_eq!(visible.len(), VISIBLE_WINDOW);
        assert_eq!(visible[0].level, 3);
        assert_eq!(visible[4].level, 7);
    }

    #[test]
    fn test_snapshot_reflects_engine_state() {
        let mut game = scripted(StackConfig::default(), vec![1]);
        for _ in 0..7 {
            game.place_block();
        }

        let snap = game.snapshot();
        assert_eq!(snap.blocks.len(), VISIBLE_WINDOW);
        assert_eq!(snap.hidden, 2);
        assert_eq!(snap.blocks_stacked, 7);
        assert_eq!(snap.score, game.score());
        assert_eq!(snap.level, game.level());
        assert!(!snap.game_over);
        assert_eq!(snap.block_width, 10);
        assert_eq!(snap.blocks.last().unwrap().level, 7);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut game = scripted(StackConfig::default(), vec![0]);
        let mut snap = StackSnapshot::default();

        for _ in 0..6 {
            game.place_block();
        }
        game.snapshot_into(&mut snap);
        assert_eq!(snap.blocks_stacked, 6);
        assert_eq!(snap.hidden, 1);

        game.reset();
        game.snapshot_into(&mut snap);
        assert!(snap.blocks.is_empty());
        assert_eq!(snap.hidden, 0);
        assert_eq!(snap.blocks_stacked, 0);
    }
}
