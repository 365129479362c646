//! Apple module - at most one apple, placed on a uniformly random cell
//!
//! Placement rejection-samples cells until the candidate differs from the
//! snake's head. Body cells are deliberately NOT excluded: an apple may
//! legally appear under a trailing segment and becomes reachable once the
//! segment moves on.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use tui_snake_types::Position;

/// The single apple: a position plus an availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Position,
    available: bool,
}

impl Apple {
    pub fn new() -> Self {
        Self {
            position: Position::new(0, 0),
            available: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn available(&self) -> bool {
        self.available
    }

    /// Mark the apple eaten; a new one will be placed on a later frame.
    pub fn consume(&mut self) {
        self.available = false;
    }

    /// Remove the apple entirely (restart).
    pub fn clear(&mut self) {
        self.available = false;
        self.position = Position::new(0, 0);
    }

    /// Place a new apple if none is available.
    ///
    /// Draws a uniform cell over the whole board, scaled by the cell size,
    /// and re-draws while the candidate equals `head`. Terminates as long as
    /// the board has more than one cell.
    pub fn ensure_spawned(&mut self, rng: &mut SimpleRng, grid: &Grid, head: Position) {
        if self.available {
            return;
        }
        loop {
            let x = rng.next_range(grid.width_cells() as u32) as i32 * grid.cell_size();
            let y = rng.next_range(grid.height_cells() as u32) as i32 * grid.cell_size();
            self.position = Position::new(x, y);
            self.available = true;
            if self.position != head {
                break;
            }
        }
    }
}

impl Default for Apple {
    fn default() -> Self {
        Self::new()
    }
}
