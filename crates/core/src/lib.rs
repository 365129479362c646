//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, clocks, or I/O, making it:
//!
//! - **Deterministic**: Same seed and frame deltas produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: O(1) body updates independent of snake length
//!
//! # Module Structure
//!
//! - [`grid`]: board dimensions and toroidal wrap arithmetic
//! - [`direction`]: heading control with the one-change-per-tick lock
//! - [`snake`]: head position plus the trailing segment ring
//! - [`apple`]: single-apple spawner with rejection sampling
//! - [`game_state`]: the playing/game-over state machine and movement timer
//! - [`rng`]: seeded LCG so whole games are reproducible
//! - [`snapshot`]: read-only state export for presentation layers
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick; ticks fire on a fixed-interval timer
//!   fed by per-frame time deltas.
//! - Leaving the board wraps to the opposite edge (toroidal board).
//! - At most one heading change is honored per tick, and a snake with a body
//!   may never reverse straight into its own neck.
//! - Eating the apple grows the body by one segment and scores points; the
//!   apple respawns on a random cell that is never the head's cell.
//! - Running into your own body (once it is longer than three segments) ends
//!   the game; a restart intent starts a fresh session.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameAction, GameConfig, GamePhase};
//!
//! let config = GameConfig {
//!     width_cells: 10,
//!     height_cells: 10,
//!     cell_size: 1,
//!     move_interval: 1.0,
//!     points_per_apple: 1,
//! };
//! let mut game = GameState::new(config, 42);
//!
//! game.apply_action(GameAction::Turn(Direction::Up));
//! game.update(1.0); // one full interval => one movement tick
//!
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert_eq!(game.head().y, 1);
//! ```

pub mod apple;
pub mod direction;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use apple::Apple;
pub use direction::DirectionControl;
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
