//! Terminal stacking game runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The loop blocks on input and redraws one
//! frame per event; there is no tick or animation timer.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_stacker::adapter::{Reply, Session};
use tui_stacker::core::{StackGame, StackSnapshot};
use tui_stacker::input::{handle_key_event, should_quit};
use tui_stacker::term::{
    message_for, FrameBuffer, StackView, TerminalRenderer, Viewport, INVALID_COMMAND_HINT,
};
use tui_stacker::types::StackConfig;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    // The farewell prints outside the alternate screen so it stays visible.
    let farewell = result?;
    println!("{}", farewell);
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<String> {
    let config = StackConfig::from_env();
    let mut session = Session::new(StackGame::with_config(config, seed_from_env()));

    let view = StackView::default();
    let mut snap = StackSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut message = String::new();

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &message, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Block until the next event; resizes fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(command) = handle_key_event(key) {
                let reply = session.handle(command);
                message = message_for(&reply);
                if matches!(reply, Reply::Goodbye(_)) {
                    return Ok(message);
                }
            } else if should_quit(key) {
                return Ok("Game interrupted. Goodbye!".to_string());
            } else if matches!(key.code, KeyCode::Char(_)) {
                message = INVALID_COMMAND_HINT.to_string();
            }
        }
    }
}

/// Seed from `STACKER_SEED`, falling back to the clock.
fn seed_from_env() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    std::env::var("STACKER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
                .unwrap_or(1)
        })
}
