//! Grid module - board dimensions and wrap-around arithmetic
//!
//! The board is `width_cells x height_cells` discrete cells; positions are
//! stored in surface units (cell coordinates scaled by the cell size).
//! Coordinates that step off one edge re-enter from the opposite edge.

use tui_snake_types::Position;

/// Board geometry: cell counts plus the cell size in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width_cells: i32,
    height_cells: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width_cells: i32, height_cells: i32, cell_size: i32) -> Self {
        Self {
            width_cells: width_cells.max(1),
            height_cells: height_cells.max(1),
            cell_size: cell_size.max(1),
        }
    }

    pub fn width_cells(&self) -> i32 {
        self.width_cells
    }

    pub fn height_cells(&self) -> i32 {
        self.height_cells
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Board width in surface units.
    pub fn width(&self) -> i32 {
        self.width_cells * self.cell_size
    }

    /// Board height in surface units.
    pub fn height(&self) -> i32 {
        self.height_cells * self.cell_size
    }

    /// Adopt new board dimensions (presentation surface resized).
    pub fn resize(&mut self, width_cells: i32, height_cells: i32) {
        self.width_cells = width_cells.max(1);
        self.height_cells = height_cells.max(1);
    }

    /// Wrap a position that stepped one cell off the board back onto the
    /// opposite edge. Positions already inside the board pass through.
    pub fn wrap(&self, pos: Position) -> Position {
        let mut wrapped = pos;
        if wrapped.x >= self.width() {
            wrapped.x = 0;
        }
        if wrapped.x < 0 {
            wrapped.x = self.width() - self.cell_size;
        }
        if wrapped.y >= self.height() {
            wrapped.y = 0;
        }
        if wrapped.y < 0 {
            wrapped.y = self.height() - self.cell_size;
        }
        wrapped
    }

    /// Whether a position lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width() && pos.y >= 0 && pos.y < self.height()
    }
}
