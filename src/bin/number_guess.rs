//! Number guessing game (companion binary).
//!
//! Line-oriented wrapper around [`tui_stacker::guess::GuessRound`]. Each
//! round draws a fresh secret from a shared [`SimpleRng`] so consecutive
//! rounds do not repeat the same number sequence.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_stacker::core::SimpleRng;
use tui_stacker::guess::{GuessRound, Outcome, MAX_ATTEMPTS, SECRET_MAX, SECRET_MIN};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rng = SimpleRng::new(clock_seed());

    loop {
        play_round(&mut rng, &mut lines)?;

        let Some(answer) = read_line(&mut lines, "\nDo you want to play again? (yes/no): ")?
        else {
            break;
        };
        let answer = answer.trim().to_lowercase();
        if answer != "yes" && answer != "y" {
            println!("\nThanks for playing! Goodbye!");
            break;
        }
        println!("\n");
    }

    Ok(())
}

/// One full round. Returns `true` when the player found the secret.
fn play_round(
    rng: &mut SimpleRng,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    println!("{}", "=".repeat(50));
    println!("Welcome to the NUMBER GUESSING GAME!");
    println!("{}", "=".repeat(50));
    println!();
    println!(
        "I'm thinking of a number between {} and {}.",
        SECRET_MIN, SECRET_MAX
    );
    println!("Can you guess it?");
    println!();

    let mut round = GuessRound::new(rng);

    while !round.over() {
        let prompt = format!(
            "Attempt {}/{} - Enter your guess: ",
            round.attempts() + 1,
            MAX_ATTEMPTS
        );
        let Some(line) = read_line(lines, &prompt)? else {
            return Ok(false);
        };
        let guess: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid input! Please enter a valid number.\n");
                continue;
            }
        };

        match round.guess(guess) {
            Outcome::OutOfRange => {
                println!(
                    "Please enter a number between {} and {}!\n",
                    SECRET_MIN, SECRET_MAX
                );
            }
            Outcome::TooLow => println!("Too low! Try a higher number.\n"),
            Outcome::TooHigh => println!("Too high! Try a lower number.\n"),
            Outcome::Correct => {
                println!("{}", "=".repeat(50));
                println!("CONGRATULATIONS! You guessed it!");
                println!("The number was {}", round.secret());
                println!("You won in {} attempts!", round.attempts());
                println!("{}", "=".repeat(50));
                return Ok(true);
            }
        }
    }

    println!("{}", "=".repeat(50));
    println!("GAME OVER! You've used all {} attempts.", MAX_ATTEMPTS);
    println!("The correct number was {}", round.secret());
    println!("{}", "=".repeat(50));
    Ok(false)
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
