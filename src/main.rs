//! Terminal snake runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer, and drives the pure simulation core with
//! one `update(dt)` per rendered frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::GameConfig;

/// Target frame duration (~60 FPS input/render cadence).
const FRAME_MS: u64 = 16;

/// Columns reserved beside the board for the score panel.
const SIDE_PANEL_COLS: u16 = 12;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut game = GameState::new(board_config(w, h, &view), seed_from_clock());
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(new_w, new_h) => {
                    let config = board_config(new_w, new_h, &view);
                    game.resize(config.width_cells, config.height_cells);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Simulate with the measured wall-clock delta.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        game.update(dt);
    }
}

/// Derive board dimensions from the terminal size, leaving room for the
/// border and the side panel. Cell size 1 keeps core positions in board
/// cells; the view scales them to terminal columns.
fn board_config(term_w: u16, term_h: u16, view: &GameView) -> GameConfig {
    let cols = term_w.saturating_sub(SIDE_PANEL_COLS + 2) / view.cell_w().max(1);
    let rows = term_h.saturating_sub(2) / view.cell_h().max(1);
    GameConfig {
        width_cells: cols.max(4) as i32,
        height_cells: rows.max(4) as i32,
        cell_size: 1,
        ..GameConfig::default()
    }
}

/// Seed apple placement from the wall clock so runs differ.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
