//! Direction controller - one honored heading change per movement tick
//!
//! The per-tick lock is a plain boolean set by the first request of the tick
//! and cleared unconditionally when the tick ends. Inputs arriving while the
//! lock is held are dropped; there is no buffering beyond that one slot.

use tui_snake_types::Direction;

/// Tracks the current heading and debounces direction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionControl {
    current: Direction,
    locked: bool,
}

impl DirectionControl {
    pub fn new() -> Self {
        Self {
            current: Direction::Right,
            locked: false,
        }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    /// Handle a heading request. Returns whether the heading changed.
    ///
    /// A request is considered only if no request was accepted this tick and
    /// it differs from the current heading. The request then claims the
    /// tick's single slot *before* the reversal rule runs: a reversal thrown
    /// away below still consumes the slot. Reversing is allowed only while
    /// the snake has no trailing body - a bodied snake cannot invert through
    /// its own neck.
    pub fn request(&mut self, new_direction: Direction, has_body: bool) -> bool {
        if self.locked || new_direction == self.current {
            return false;
        }
        self.locked = true;

        if new_direction == self.current.opposite() && has_body {
            return false;
        }
        self.current = new_direction;
        true
    }

    /// Clear the per-tick lock. Runs at the end of every movement tick,
    /// whether or not a heading change happened.
    pub fn end_tick(&mut self) {
        self.locked = false;
    }

    /// Back to the initial heading with the lock released.
    pub fn reset(&mut self) {
        self.current = Direction::Right;
        self.locked = false;
    }
}

impl Default for DirectionControl {
    fn default() -> Self {
        Self::new()
    }
}
