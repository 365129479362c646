//! Read-only state export for presentation layers.

use tui_snake_types::{GamePhase, Position};

/// Everything a frontend needs to draw one frame.
///
/// `snapshot_into` reuses the body allocation, so a caller keeping one
/// snapshot across frames stays allocation-free once the body's high-water
/// mark is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub head: Position,
    /// Trailing segments, nearest-to-head first.
    pub body: Vec<Position>,
    pub apple: Position,
    pub apple_available: bool,
    pub score: u32,
    pub phase: GamePhase,
    pub width_cells: i32,
    pub height_cells: i32,
    pub cell_size: i32,
}

impl GameSnapshot {
    pub fn playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            head: Position::new(0, 0),
            body: Vec::new(),
            apple: Position::new(0, 0),
            apple_available: false,
            score: 0,
            phase: GamePhase::Playing,
            width_cells: 0,
            height_cells: 0,
            cell_size: 1,
        }
    }
}
