//! Number guessing game - one round of guess-the-secret
//!
//! The round holds a secret between 1 and 100 and grades guesses as too
//! low, too high, or correct. Ten attempts are allowed; a guess outside
//! the valid range still consumes an attempt, while input that fails to
//! parse (handled by the caller) does not.
//!
//! # Example
//!
//! ```
//! use tui_stacker_guess::{GuessRound, Outcome};
//!
//! let mut round = GuessRound::with_secret(42);
//! assert_eq!(round.guess(10), Outcome::TooLow);
//! assert_eq!(round.guess(90), Outcome::TooHigh);
//! assert_eq!(round.guess(42), Outcome::Correct);
//! assert!(round.won());
//! assert_eq!(round.attempts(), 3);
//! ```

use tui_stacker_core::rng::RandomSource;

/// Smallest valid secret and guess.
pub const SECRET_MIN: i32 = 1;

/// Largest valid secret and guess.
pub const SECRET_MAX: i32 = 100;

/// Attempts allowed per round.
pub const MAX_ATTEMPTS: u32 = 10;

/// How one guess compared against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
    /// Outside `[SECRET_MIN, SECRET_MAX]`. Still costs an attempt.
    OutOfRange,
}

/// One round of the guessing game.
#[derive(Debug, Clone)]
pub struct GuessRound {
    secret: i32,
    attempts: u32,
    won: bool,
}

impl GuessRound {
    /// Start a round with a secret drawn from the given source.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self::with_secret(rng.next_in_range(SECRET_MIN, SECRET_MAX))
    }

    /// Start a round with a known secret, for tests.
    pub fn with_secret(secret: i32) -> Self {
        Self {
            secret,
            attempts: 0,
            won: false,
        }
    }

    /// Grade one guess.
    ///
    /// The attempt counter advances before the range check, so an
    /// out-of-range guess burns an attempt just like a wrong one.
    pub fn guess(&mut self, n: i64) -> Outcome {
        self.attempts += 1;
        if n < SECRET_MIN as i64 || n > SECRET_MAX as i64 {
            return Outcome::OutOfRange;
        }

        if n < self.secret as i64 {
            Outcome::TooLow
        } else if n > self.secret as i64 {
            Outcome::TooHigh
        } else {
            self.won = true;
            Outcome::Correct
        }
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// The round ends on a win or when all attempts are spent.
    pub fn over(&self) -> bool {
        self.won || self.exhausted()
    }
}
