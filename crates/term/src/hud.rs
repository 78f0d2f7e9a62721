//! TermHost: the terminal's implementation of the core host boundary.

use crate::canvas::PixelCanvas;
use crate::core::{Canvas, GameConfig, GameEvents};
use crate::types::Rgb;

/// Status shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u32,
    pub step_period_ms: u32,
    pub length: usize,
    /// Latched by the host once `game_over` fires; cleared on restart.
    pub game_over: bool,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub struct TermHost {
    pub canvas: PixelCanvas,
    pub hud: Hud,
}

impl TermHost {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            canvas: PixelCanvas::for_config(config),
            hud: Hud {
                step_period_ms: config.initial_step_period_ms,
                ..Hud::default()
            },
        }
    }

    /// Forget the previous round's status before re-running `init`.
    pub fn reset(&mut self, config: &GameConfig) {
        self.hud = Hud {
            step_period_ms: config.initial_step_period_ms,
            ..Hud::default()
        };
    }
}

impl Canvas for TermHost {
    fn set_fill_style(&mut self, color: Rgb) {
        self.canvas.set_fill_style(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.canvas.fill_rect(x, y, width, height);
    }

    fn fill(&mut self) {
        self.canvas.fill();
    }
}

impl GameEvents for TermHost {
    fn score_changed(&mut self, score: u32) {
        self.hud.score = score;
    }

    fn step_period_updated(&mut self, period_ms: u32) {
        self.hud.step_period_ms = period_ms;
    }

    fn game_over(&mut self) {
        self.hud.game_over = true;
    }
}
