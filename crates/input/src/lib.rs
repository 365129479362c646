//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] intents that the
//! core consumes; everything else (debouncing to one turn per tick, ignoring
//! restarts while playing) is the core's job.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
