//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to a terminal
//! backend once per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide precise control over aspect ratio (e.g. 2 chars wide per cell)
//! - Keep the view pure so it can be unit-tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
