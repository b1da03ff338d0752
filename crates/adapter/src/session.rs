//! Session module - command dispatch against the engine
//!
//! Maps player commands onto engine calls and reports what happened as a
//! [`Reply`]. The session enforces the game-over policy the engine leaves
//! to its callers: once the tower topples, placement and undo are refused
//! until a reset, while stats, reset, and quit are always served.

use crate::core::snapshot::StackSnapshot;
use crate::core::StackGame;
use crate::types::{Command, GameStats};

/// Why a command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The tower has toppled; reset before placing or undoing.
    GameOver,
    /// Nothing above the foundation to remove.
    FoundationBlock,
}

/// Outcome of one handled command.
///
/// Pure data; turning a reply into display text is the view's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Block landed; carries the post-placement statistics.
    Placed(GameStats),
    /// Block missed the stack and the game is over.
    Toppled(GameStats),
    /// Top block removed.
    Undone(GameStats),
    /// Command refused; nothing changed.
    Rejected(RejectReason),
    /// Statistics report.
    Report(GameStats),
    /// Game returned to its initial state.
    Reset,
    /// Session finished; carries the final statistics.
    Goodbye(GameStats),
}

/// One interactive game session.
#[derive(Debug)]
pub struct Session {
    game: StackGame,
    finished: bool,
}

impl Session {
    pub fn new(game: StackGame) -> Self {
        Self {
            game,
            finished: false,
        }
    }

    /// Execute one command and report the outcome.
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Place => {
                if self.game.game_over() {
                    return Reply::Rejected(RejectReason::GameOver);
                }
                if self.game.place_block() {
                    Reply::Placed(self.game.stats())
                } else {
                    Reply::Toppled(self.game.stats())
                }
            }
            Command::Undo => {
                if self.game.game_over() {
                    return Reply::Rejected(RejectReason::GameOver);
                }
                if self.game.undo_last_block() {
                    Reply::Undone(self.game.stats())
                } else {
                    Reply::Rejected(RejectReason::FoundationBlock)
                }
            }
            Command::Stats => Reply::Report(self.game.stats()),
            Command::Reset => {
                self.game.reset();
                Reply::Reset
            }
            Command::Quit => {
                self.finished = true;
                Reply::Goodbye(self.game.stats())
            }
        }
    }

    /// Set once a quit command has been handled.
    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn game(&self) -> &StackGame {
        &self.game
    }

    /// Write the current render snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut StackSnapshot) {
        self.game.snapshot_into(out);
    }
}
