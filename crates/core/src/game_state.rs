//! Game state module - the playing/game-over machine and movement timer
//!
//! Ties grid, snake, direction control, apple and scoring together. The
//! presentation layer calls [`GameState::update`] once per rendered frame
//! with the elapsed seconds; movement ticks fire whenever the countdown
//! timer crosses zero, and the timer snaps back to the full interval
//! (overshoot beyond one interval is discarded).

use crate::apple::Apple;
use crate::direction::DirectionControl;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use tui_snake_types::{Direction, GameAction, GameConfig, GamePhase, Position};

/// Complete game state.
///
/// Owned exclusively by one logical thread of control; frontends submit
/// intents via [`apply_action`](Self::apply_action) and read state via the
/// accessors or [`snapshot_into`](Self::snapshot_into).
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    direction: DirectionControl,
    apple: Apple,
    rng: SimpleRng,
    score: u32,
    phase: GamePhase,
    /// Countdown to the next movement tick, in seconds.
    timer: f32,
    move_interval: f32,
    points_per_apple: u32,
}

impl GameState {
    /// Create a new game: head at the board origin, no body, heading right,
    /// no apple, score 0, timer at the full interval.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            grid: Grid::new(config.width_cells, config.height_cells, config.cell_size),
            snake: Snake::new(Position::new(0, 0)),
            direction: DirectionControl::new(),
            apple: Apple::new(),
            rng: SimpleRng::new(seed),
            score: 0,
            phase: GamePhase::Playing,
            timer: config.move_interval,
            move_interval: config.move_interval,
            points_per_apple: config.points_per_apple,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Trailing segment positions, nearest-to-head first.
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.segments()
    }

    pub fn body_len(&self) -> usize {
        self.snake.len()
    }

    pub fn apple_position(&self) -> Position {
        self.apple.position()
    }

    pub fn apple_available(&self) -> bool {
        self.apple.available()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance the simulation by one rendered frame.
    ///
    /// While playing: run a movement tick if the timer expires, then run the
    /// apple-eaten and apple-spawn checks. The apple checks are per-frame,
    /// not per-tick. While game over this is a no-op; a restart arrives as
    /// an intent, not through the timer.
    pub fn update(&mut self, dt_seconds: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.timer -= dt_seconds;
        if self.timer <= 0.0 {
            self.timer = self.move_interval;
            self.step();
        }

        self.check_apple_eaten();
        self.apple
            .ensure_spawned(&mut self.rng, &self.grid, self.snake.head());
    }

    /// One movement tick: move, wrap, trail the body, detect self-collision,
    /// release the direction lock.
    fn step(&mut self) {
        let prev_head = self.snake.head();
        let moved = step_position(
            prev_head,
            self.direction.current(),
            self.grid.cell_size(),
        );
        self.snake.set_head(self.grid.wrap(moved));
        self.snake.follow_head(prev_head);

        if self.self_collision() {
            self.phase = GamePhase::GameOver;
        }
        self.direction.end_tick();
    }

    /// Self-collision counts only once the body is longer than three
    /// segments; shorter bodies may overlap the head freely (a just-grown
    /// segment starts out on the head's cell).
    fn self_collision(&self) -> bool {
        let head = self.snake.head();
        self.snake.len() > 3 && self.snake.segments().any(|segment| segment == head)
    }

    /// Head-on-apple check: grow a segment on the head's cell, add score,
    /// consume the apple.
    fn check_apple_eaten(&mut self) {
        if self.apple.available() && self.snake.head() == self.apple.position() {
            self.snake.grow_at_head(self.snake.head());
            self.score += self.points_per_apple;
            self.apple.consume();
        }
    }

    /// Submit a heading request. Silently ignored out of protocol: while
    /// game over, when this tick's slot is already claimed, or when it would
    /// reverse a bodied snake into its own neck.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.direction.request(direction, self.snake.has_body());
    }

    /// Restart the session. Effective only while game over; a full atomic
    /// reset of snake, heading, apple, score and timer, then back to playing.
    pub fn request_restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.snake.reset(Position::new(0, 0));
        self.direction.reset();
        self.apple.clear();
        self.score = 0;
        self.timer = self.move_interval;
        self.phase = GamePhase::Playing;
    }

    /// Single entry point for player intents.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(direction) => self.request_direction(direction),
            GameAction::Restart => self.request_restart(),
        }
    }

    /// Adopt new board dimensions from the presentation layer.
    ///
    /// Takes effect on the next wrap; positions already off the shrunken
    /// board wrap back in when the head next moves.
    pub fn resize(&mut self, width_cells: i32, height_cells: i32) {
        self.grid.resize(width_cells, height_cells);
    }

    /// Export drawable state, reusing the snapshot's body allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.head = self.snake.head();
        out.body.clear();
        out.body.extend(self.snake.segments());
        out.apple = self.apple.position();
        out.apple_available = self.apple.available();
        out.score = self.score;
        out.phase = self.phase;
        out.width_cells = self.grid.width_cells();
        out.height_cells = self.grid.height_cells();
        out.cell_size = self.grid.cell_size();
    }

    /// Convenience helper that allocates a new snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// One cell step in the given heading. `y` grows upward.
fn step_position(pos: Position, direction: Direction, cell_size: i32) -> Position {
    match direction {
        Direction::Right => Position::new(pos.x + cell_size, pos.y),
        Direction::Left => Position::new(pos.x - cell_size, pos.y),
        Direction::Up => Position::new(pos.x, pos.y + cell_size),
        Direction::Down => Position::new(pos.x, pos.y - cell_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GameConfig {
        GameConfig {
            width_cells: 10,
            height_cells: 10,
            cell_size: 1,
            move_interval: 1.0,
            points_per_apple: 1,
        }
    }

    fn ticked(game: &mut GameState) {
        game.update(1.0);
    }

    #[test]
    fn new_game_initial_state() {
        let game = GameState::new(test_config(), 42);

        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.head(), Position::new(0, 0));
        assert_eq!(game.body_len(), 0);
        assert_eq!(game.score(), 0);
        assert!(!game.apple_available());
    }

    #[test]
    fn timer_gates_movement() {
        let mut game = GameState::new(test_config(), 42);

        // Half an interval: no tick yet.
        game.update(0.5);
        assert_eq!(game.head(), Position::new(0, 0));

        // The other half crosses zero: one tick.
        game.update(0.5);
        assert_eq!(game.head(), Position::new(1, 0));
    }

    #[test]
    fn timer_overshoot_is_discarded() {
        let mut game = GameState::new(test_config(), 42);

        // 3.5 intervals in one frame still produce exactly one tick, and the
        // timer snaps back to the full interval.
        game.update(3.5);
        assert_eq!(game.head(), Position::new(1, 0));

        game.update(0.5);
        assert_eq!(game.head(), Position::new(1, 0));
        game.update(0.5);
        assert_eq!(game.head(), Position::new(2, 0));
    }

    #[test]
    fn head_wraps_at_the_right_edge() {
        let mut game = GameState::new(test_config(), 42);

        for expected_x in 1..10 {
            ticked(&mut game);
            assert_eq!(game.head(), Position::new(expected_x, 0));
        }
        ticked(&mut game);
        assert_eq!(game.head(), Position::new(0, 0));
    }

    #[test]
    fn direction_lock_clears_on_tick() {
        let mut game = GameState::new(test_config(), 42);

        game.request_direction(Direction::Up);
        // Second request between ticks is dropped.
        game.request_direction(Direction::Left);
        ticked(&mut game);
        assert_eq!(game.head(), Position::new(0, 1));

        // After the tick the lock is free again.
        game.request_direction(Direction::Left);
        ticked(&mut game);
        assert_eq!(game.head(), Position::new(9, 1));
    }

    #[test]
    fn bodiless_snake_may_reverse() {
        let mut game = GameState::new(test_config(), 42);

        game.request_direction(Direction::Left);
        ticked(&mut game);
        assert_eq!(game.head(), Position::new(9, 0));
    }

    #[test]
    fn apple_spawns_on_the_first_frame() {
        let mut game = GameState::new(test_config(), 42);

        game.update(0.0);
        assert!(game.apple_available());
        assert!(game.grid().contains(game.apple_position()));
        assert_ne!(game.apple_position(), game.head());
    }

    #[test]
    fn eating_the_apple_grows_and_scores() {
        let mut game = GameState::new(test_config(), 42);
        game.update(0.0);
        let apple = game.apple_position();

        steer_head_to(&mut game, apple);

        assert_eq!(game.score(), 1);
        assert_eq!(game.body_len(), 1);
        // The new segment sits on the cell where the apple was eaten.
        assert_eq!(game.body().next(), Some(apple));
        // A replacement apple was spawned the same frame.
        assert!(game.apple_available());
        assert_ne!(game.apple_position(), apple);
    }

    #[test]
    fn self_collision_requires_more_than_three_segments() {
        let mut game = GameState::new(test_config(), 42);

        // Three segments parked on the head's cell: harmless.
        game.snake.grow_at_head(game.head());
        game.snake.grow_at_head(game.head());
        game.snake.grow_at_head(game.head());
        assert!(!game.self_collision());

        // The fourth coincident segment crosses the threshold.
        game.snake.grow_at_head(game.head());
        assert!(game.self_collision());
    }

    #[test]
    fn tight_loop_with_four_segments_ends_the_game() {
        let mut game = GameState::new(test_config(), 42);

        // Plant four segments behind the head, as if four apples were eaten.
        for _ in 0..4 {
            game.snake.grow_at_head(game.head());
        }

        // A 2x2 loop brings the head back onto a trailing segment.
        for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            game.request_direction(direction);
            ticked(&mut game);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn game_over_freezes_the_simulation() {
        let mut game = GameState::new(test_config(), 42);
        for _ in 0..4 {
            game.snake.grow_at_head(game.head());
        }
        for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            game.request_direction(direction);
            ticked(&mut game);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);

        let head = game.head();
        ticked(&mut game);
        ticked(&mut game);
        assert_eq!(game.head(), head);

        // Direction intents are ignored while game over.
        game.request_direction(Direction::Up);
        assert_eq!(game.direction.current(), Direction::Right);
    }

    #[test]
    fn restart_resets_everything() {
        let mut game = GameState::new(test_config(), 42);
        game.update(0.0);
        let apple = game.apple_position();
        steer_head_to(&mut game, apple);

        for _ in 0..3 {
            game.snake.grow_at_head(game.head());
        }
        for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            game.request_direction(direction);
            ticked(&mut game);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);

        game.request_restart();

        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.head(), Position::new(0, 0));
        assert_eq!(game.body_len(), 0);
        assert_eq!(game.score(), 0);
        assert!(!game.apple_available());
        assert_eq!(game.direction.current(), Direction::Right);
    }

    #[test]
    fn restart_is_ignored_while_playing() {
        let mut game = GameState::new(test_config(), 42);
        ticked(&mut game);
        let head = game.head();

        game.apply_action(GameAction::Restart);

        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.head(), head);
    }

    #[test]
    fn same_seed_same_frames_same_game() {
        let mut a = GameState::new(test_config(), 777);
        let mut b = GameState::new(test_config(), 777);

        let script = [
            GameAction::Turn(Direction::Up),
            GameAction::Turn(Direction::Left),
            GameAction::Turn(Direction::Down),
            GameAction::Turn(Direction::Right),
        ];
        for action in script {
            a.apply_action(action);
            b.apply_action(action);
            a.update(1.0);
            b.update(1.0);
        }

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn snapshot_reports_drawable_state() {
        let mut game = GameState::new(test_config(), 42);
        game.update(0.0);
        ticked(&mut game);

        let snap = game.snapshot();
        assert_eq!(snap.head, game.head());
        assert_eq!(snap.apple, game.apple_position());
        assert!(snap.apple_available);
        assert_eq!(snap.width_cells, 10);
        assert_eq!(snap.cell_size, 1);
        assert!(snap.playing());
    }

    /// Drive the head onto `target` one tick at a time: first match x
    /// moving right, then match y moving up. Wrap makes every cell
    /// reachable; panics if the target is not reached in a board's worth
    /// of ticks.
    fn steer_head_to(game: &mut GameState, target: Position) {
        for _ in 0..100 {
            if game.head() == target {
                return;
            }
            if game.head().x != target.x {
                game.request_direction(Direction::Right);
            } else {
                game.request_direction(Direction::Up);
            }
            game.update(1.0);
        }
        panic!("head never reached {target:?}");
    }
}
