//! StackView: maps a `core::StackSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The layout is a bordered tower window (newest block on top) with a
//! statistics panel to the right and a message plus help line below. It
//! also owns the display wording for session replies, so the engine and
//! adapter stay free of presentation strings.

use crate::adapter::{RejectReason, Reply};
use crate::core::snapshot::StackSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::VISIBLE_WINDOW;

/// Columns taken by the `L 1: ` row label.
const LABEL_W: u16 = 5;

/// Hint shown when a key maps to no command.
pub const INVALID_COMMAND_HINT: &str = "Invalid command. Try 'a', 'u', 's', 'r', or 'q'.";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the stacking game.
pub struct StackView {
    anchor_y: AnchorY,
}

impl Default for StackView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl StackView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only pay for a resize when the terminal changes.
    pub fn render_into(
        &self,
        snap: &StackSnapshot,
        message: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let inner_w = (LABEL_W + 2 * snap.block_width as u16).max(36);
        let inner_h = VISIBLE_WINDOW as u16 + 1;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_tower(fb, snap, start_x, start_y, inner_w);
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        // Message and help lines under the frame.
        fb.put_str(start_x, start_y + frame_h, message, CellStyle::default());
        let help = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(
            start_x,
            start_y + frame_h + 1,
            "a:add  u:undo  s:stats  r:reset  q:quit",
            help,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &StackSnapshot, message: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, message, viewport, &mut fb);
        fb
    }

    fn draw_tower(
        &self,
        fb: &mut FrameBuffer,
        snap: &StackSnapshot,
        start_x: u16,
        start_y: u16,
        inner_w: u16,
    ) {
        if snap.blocks.is_empty() {
            let hint = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            let mid_y = start_y + 1 + VISIBLE_WINDOW as u16 / 2;
            fb.put_str(
                start_x + 2,
                mid_y,
                "Stack is empty. Start adding blocks!",
                hint,
            );
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let bar_span = inner_w - LABEL_W;

        // Newest block renders on the top row.
        for (row, block) in snap.blocks.iter().rev().enumerate() {
            let y = start_y + 1 + row as u16;
            put_level_label(fb, start_x + 1, y, block.level, label);

            let padding = block.position.max(0) as u16;
            if padding >= bar_span {
                continue;
            }
            let visible_w = (block.width as u16).min(bar_span - padding);
            let style = CellStyle {
                fg: bar_color(block.level),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            };
            fb.fill_row(start_x + 1 + LABEL_W + padding, y, visible_w, '█', style);
        }

        if snap.hidden > 0 {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            let y = start_y + 1 + VISIBLE_WINDOW as u16;
            fb.put_str(start_x + 1, y, "... (", dim);
            fb.put_u32(start_x + 6, y, snap.hidden, dim);
            let digits = decimal_width(snap.hidden);
            fb.put_str(start_x + 6 + digits, y, " more blocks)", dim);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &StackSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BLOCKS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.blocks_stacked, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Display wording for a session reply.
///
/// Successful placements return an empty message; the redrawn tower is the
/// feedback.
pub fn message_for(reply: &Reply) -> String {
    match reply {
        Reply::Placed(_) => String::new(),
        Reply::Toppled(_) => "GAME OVER! Block fell off the stack!".to_string(),
        Reply::Undone(_) => "Block removed!".to_string(),
        Reply::Rejected(RejectReason::FoundationBlock) => {
            "Cannot undo. At least one block required.".to_string()
        }
        Reply::Rejected(RejectReason::GameOver) => {
            "Game over. Reset with 'r' or quit with 'q'.".to_string()
        }
        Reply::Report(stats) => format!(
            "Blocks Stacked: {} | Score: {} | Level: {} | Game Over: {}",
            stats.blocks_stacked,
            stats.score,
            stats.level,
            if stats.game_over { "yes" } else { "no" }
        ),
        Reply::Reset => "Game reset!".to_string(),
        Reply::Goodbye(stats) => format!("Thanks for playing! Final Score: {}", stats.score),
    }
}

/// `L` plus the placement ordinal right-aligned in two columns, then `:`.
fn put_level_label(fb: &mut FrameBuffer, x: u16, y: u16, level: u32, style: CellStyle) {
    fb.put_char(x, y, 'L', style);
    let digits = decimal_width(level);
    let num_x = x + 1 + 2u16.saturating_sub(digits);
    fb.put_u32(num_x, y, level, style);
    fb.put_char(num_x + digits, y, ':', style);
}

fn bar_color(level: u32) -> Rgb {
    match level % 7 {
        0 => Rgb::new(80, 220, 220),
        1 => Rgb::new(240, 220, 80),
        2 => Rgb::new(200, 120, 220),
        3 => Rgb::new(100, 220, 120),
        4 => Rgb::new(220, 80, 80),
        5 => Rgb::new(80, 120, 220),
        _ => Rgb::new(255, 165, 0),
    }
}

fn decimal_width(value: u32) -> u16 {
    let mut n = value;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}
