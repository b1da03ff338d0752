//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from snapshots so the engine is never borrowed across a frame
//! - Redraw only when input arrives; there is no animation loop

pub mod fb;
pub mod renderer;
pub mod stack_view;

pub use tui_stacker_adapter as adapter;
pub use tui_stacker_core as core;
pub use tui_stacker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use stack_view::{message_for, AnchorY, StackView, Viewport, INVALID_COMMAND_HINT};
