//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Positions are in board surface units: integer `(x, y)` pairs that are always
//! a multiple of the configured cell size. `x` grows to the right, `y` grows
//! upward (presentation layers that draw top-down flip the row axis themselves).
//!
//! # Configuration defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CELL_SIZE` | 32 | Snake step / grid cell size in surface units |
//! | `DEFAULT_MOVE_INTERVAL` | 0.5 | Seconds between movement ticks |
//! | `POINTS_PER_APPLE` | 1 | Score awarded per apple eaten |
//!
//! Board width/height in cells are not constants: the presentation layer
//! derives them from its surface dimensions and supplies them through
//! [`GameConfig`] at startup and on resize.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameConfig, Position};
//!
//! let pos = Position::new(64, 32);
//! assert_eq!(pos.x, 64);
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // 640x480 surface at the default 32px cell => 20x15 cells.
//! let config = GameConfig::from_surface(640, 480, 32);
//! assert_eq!((config.width_cells, config.height_cells), (20, 15));
//! ```

/// Snake step and grid cell size in surface units (pixels, for graphical frontends).
pub const DEFAULT_CELL_SIZE: i32 = 32;

/// Seconds between movement ticks.
pub const DEFAULT_MOVE_INTERVAL: f32 = 0.5;

/// Score awarded per apple eaten.
pub const POINTS_PER_APPLE: u32 = 1;

/// A point on the board, in surface units.
///
/// Always a multiple of the cell size while the game invariants hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The snake's heading.
///
/// Exactly one direction is current at any time, and it changes at most once
/// per movement tick (enforced by the core's direction controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The exact reverse heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Machine state of one play session.
///
/// `Playing` is the initial state. `GameOver` is terminal until an explicit
/// restart intent arrives; restarting performs a full atomic reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Player intents accepted by the core.
///
/// These are the only two ways a presentation layer may mutate core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a heading change (at most one honored per movement tick).
    Turn(Direction),
    /// Restart the game (effective only while game over).
    Restart,
}

/// Construction-time configuration, supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Board width in cells.
    pub width_cells: i32,
    /// Board height in cells.
    pub height_cells: i32,
    /// Cell size in surface units; every position is a multiple of this.
    pub cell_size: i32,
    /// Seconds between movement ticks.
    pub move_interval: f32,
    /// Score awarded per apple.
    pub points_per_apple: u32,
}

impl GameConfig {
    /// Derive board dimensions from a presentation surface, in the same way
    /// a windowed frontend divides its pixel size by the cell size.
    ///
    /// Dimensions are clamped to at least one cell so a degenerate surface
    /// still yields a usable board.
    pub fn from_surface(surface_width: i32, surface_height: i32, cell_size: i32) -> Self {
        Self {
            width_cells: (surface_width / cell_size).max(1),
            height_cells: (surface_height / cell_size).max(1),
            cell_size,
            move_interval: DEFAULT_MOVE_INTERVAL,
            points_per_apple: POINTS_PER_APPLE,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_surface(640, 480, DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn config_from_surface_divides_by_cell_size() {
        let config = GameConfig::from_surface(640, 480, 32);
        assert_eq!(config.width_cells, 20);
        assert_eq!(config.height_cells, 15);
        assert_eq!(config.cell_size, 32);
    }

    #[test]
    fn config_from_surface_clamps_to_one_cell() {
        let config = GameConfig::from_surface(10, 0, 32);
        assert_eq!(config.width_cells, 1);
        assert_eq!(config.height_cells, 1);
    }

    #[test]
    fn default_timing_constants() {
        let config = GameConfig::default();
        assert_eq!(config.move_interval, DEFAULT_MOVE_INTERVAL);
        assert_eq!(config.points_per_apple, POINTS_PER_APPLE);
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
    }
}
