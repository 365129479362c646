//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = snap.width_cells.max(0) as u16 * self.cell_w;
        let board_h = snap.height_cells.max(0) as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 24, 20),
            bold: false,
            dim: true,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Play area background with grid dots.
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, '·', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Apple.
        if snap.apple_available {
            let apple_style = CellStyle {
                fg: Rgb::new(220, 60, 60),
                bg: Rgb::new(20, 24, 20),
                bold: true,
                dim: false,
            };
            if let Some((cx, cy)) = self.board_cell(snap, snap.apple) {
                self.fill_cell_rect(fb, start_x, start_y, cx, cy, '●', apple_style);
            }
        }

        // Trailing body.
        let body_style = CellStyle {
            fg: Rgb::new(90, 180, 90),
            bg: Rgb::new(20, 24, 20),
            bold: false,
            dim: false,
        };
        for &segment in &snap.body {
            // A just-grown segment still sits under the head; skip it so the
            // head glyph stays visible.
            if segment == snap.head {
                continue;
            }
            if let Some((cx, cy)) = self.board_cell(snap, segment) {
                self.fill_cell_rect(fb, start_x, start_y, cx, cy, '▓', body_style);
            }
        }

        // Head on top of everything.
        let head_style = CellStyle {
            fg: Rgb::new(140, 240, 120),
            bg: Rgb::new(20, 24, 20),
            bold: true,
            dim: false,
        };
        if let Some((cx, cy)) = self.board_cell(snap, snap.head) {
            self.fill_cell_rect(fb, start_x, start_y, cx, cy, '█', head_style);
        }

        // Side panel.
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlay.
        if !snap.playing() {
            self.draw_overlay_text(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER... press r to restart!",
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Surface-unit position -> board cell in terminal orientation.
    ///
    /// Board y grows upward while terminal rows grow downward, so the row
    /// axis is flipped here. Positions off the board (mid-resize) are culled.
    fn board_cell(&self, snap: &GameSnapshot, pos: crate::types::Position) -> Option<(u16, u16)> {
        let cell = snap.cell_size.max(1);
        let cx = pos.x / cell;
        let cy = pos.y / cell;
        if cx < 0 || cx >= snap.width_cells || cy < 0 || cy >= snap.height_cells {
            return None;
        }
        Some((cx as u16, (snap.height_cells - 1 - cy) as u16))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        // Head plus trailing segments.
        fb.put_u32(panel_x, y, snap.body.len() as u32 + 1, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
