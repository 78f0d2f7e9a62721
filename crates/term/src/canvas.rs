//! PixelCanvas: the core's pixel-space paint calls, rasterized to grid cells.
//!
//! The core paints in pixels (`cell * cell_size`). A terminal cannot show
//! pixels, so every rectangle is mapped back onto the grid cells it touches.
//! Paint goes to a staging grid; `fill` commits it, like a canvas flush.

use crate::core::{Canvas, GameConfig};
use crate::types::{Rgb, COLOR_BACKGROUND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    cols: u16,
    rows: u16,
    cell_size: u16,
    fill_style: Rgb,
    staging: Vec<Rgb>,
    committed: Vec<Rgb>,
    frames: u64,
}

impl PixelCanvas {
    pub fn new(cols: u16, rows: u16, cell_size: u16) -> Self {
        let len = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            cell_size: cell_size.max(1),
            fill_style: COLOR_BACKGROUND,
            staging: vec![COLOR_BACKGROUND; len],
            committed: vec![COLOR_BACKGROUND; len],
            frames: 0,
        }
    }

    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.cell_size)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Committed color of grid cell `(x, y)`.
    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(self.committed[y as usize * self.cols as usize + x as usize])
    }

    /// Number of committed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Inclusive cell span covered by pixel span `[start, start + len)`,
    /// clipped to `0..limit`.
    fn cell_span(&self, start: i32, len: i32, limit: u16) -> Option<(u16, u16)> {
        if len <= 0 || limit == 0 {
            return None;
        }
        let size = self.cell_size as i64;
        let first = (start as i64).div_euclid(size);
        let last = (start as i64 + len as i64 - 1).div_euclid(size);
        if last < 0 || first >= limit as i64 {
            return None;
        }
        let first = first.max(0) as u16;
        let last = last.min(limit as i64 - 1) as u16;
        Some((first, last))
    }
}

impl Canvas for PixelCanvas {
    fn set_fill_style(&mut self, color: Rgb) {
        self.fill_style = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let Some((x0, x1)) = self.cell_span(x, width, self.cols) else {
            return;
        };
        let Some((y0, y1)) = self.cell_span(y, height, self.rows) else {
            return;
        };
        for cy in y0..=y1 {
            let row = cy as usize * self.cols as usize;
            for cx in x0..=x1 {
                self.staging[row + cx as usize] = self.fill_style;
            }
        }
    }

    fn fill(&mut self) {
        self.committed.copy_from_slice(&self.staging);
        self.frames += 1;
    }
}
