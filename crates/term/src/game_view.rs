//! GameView: maps the committed board and HUD into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::hud::Hud;
use crate::types::COLOR_BACKGROUND;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Columns the side panel needs to the right of the board frame.
pub const PANEL_WIDTH: u16 = 16;

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps grid cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Largest grid (cols, rows) whose frame and panel fit in `viewport`.
    pub fn fit_grid(&self, viewport: Viewport) -> (u16, u16) {
        let cols = viewport.width.saturating_sub(2 + PANEL_WIDTH) / self.cell_w;
        let rows = viewport.height.saturating_sub(2) / self.cell_h;
        (cols, rows)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        canvas: &PixelCanvas,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_w = canvas.cols() * self.cell_w;
        let board_h = canvas.rows() * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let used_w = frame_w + PANEL_WIDTH;
        let start_x = viewport.width.saturating_sub(used_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..canvas.rows() {
            for x in 0..canvas.cols() {
                let color = canvas.get(x, y).unwrap_or(COLOR_BACKGROUND);
                let (ch, style) = if color == COLOR_BACKGROUND {
                    ('·', CellStyle::fg(Rgb::new(60, 60, 70)).on(BOARD_BG).dim())
                } else {
                    ('█', CellStyle::fg(color).on(BOARD_BG))
                };
                let px = start_x + 1 + x * self.cell_w;
                let py = start_y + 1 + y * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, hud, start_x + frame_w + 2, start_y);

        if hud.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", "r to restart");
        } else if hud.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", "p to resume");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &PixelCanvas, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.set(x, y, style.cell('┌'));
        fb.set(right, y, style.cell('┐'));
        fb.set(x, bottom, style.cell('└'));
        fb.set(right, bottom, style.cell('┘'));
        for cx in x + 1..right {
            fb.set(cx, y, style.cell('─'));
            fb.set(cx, bottom, style.cell('─'));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, style.cell('│'));
            fb.set(right, cy, style.cell('│'));
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, hud: &Hud, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut row = y;
        fb.put_str(x, row, "SCORE", label);
        fb.put_u32(x, row + 1, hud.score, value);
        row += 3;

        fb.put_str(x, row, "SPEED", label);
        fb.put_u32(x, row + 1, hud.step_period_ms, value);
        let digits = hud.step_period_ms.max(1).ilog10() as u16 + 1;
        fb.put_str(x + digits, row + 1, "ms", value);
        row += 3;

        fb.put_str(x, row, "LENGTH", label);
        fb.put_u32(x, row + 1, hud.length as u32, value);
        row += 3;

        for line in ["arrows/wasd", "p  pause", "r  restart", "q  quit"] {
            fb.put_str(x, row, line, hint);
            row += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        subtitle: &str,
    ) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let mid_y = start_y + frame_h / 2;
        for (dy, text) in [(0u16, title), (1, subtitle)] {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let s = if dy == 0 { style } else { style.dim() };
            fb.put_str(x, mid_y.saturating_sub(1) + dy, text, s);
        }
    }
}
