//! Session configuration.
//!
//! Defaults reproduce the classic 40x40 game. Hosts may shrink the grid (for
//! small terminals) or retune the speed curve, but every value is checked by
//! [`GameConfig::validate`] before a session is built from it.

use anyhow::{ensure, Result};

use crate::types::{
    CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, INITIAL_REWARD, INITIAL_SNAKE_LENGTH,
    INITIAL_STEP_PERIOD_MS, MAX_CELLS, MIN_STEP_PERIOD_MS, REWARD_INCREMENT, SPEEDUP_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Pixel size of one cell on the host canvas.
    pub cell_size: u16,
    pub initial_step_period_ms: u32,
    /// Floor of the step period; speed-up only applies while above it.
    pub min_step_period_ms: u32,
    pub speedup_ms: u32,
    pub initial_reward: u32,
    pub reward_increment: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            initial_step_period_ms: INITIAL_STEP_PERIOD_MS,
            min_step_period_ms: MIN_STEP_PERIOD_MS,
            speedup_ms: SPEEDUP_MS,
            initial_reward: INITIAL_REWARD,
            reward_increment: REWARD_INCREMENT,
        }
    }
}

impl GameConfig {
    /// Same tuning as the default, on a `width` x `height` grid.
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Number of grid cells; also the logical capacity of the snake.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Canvas extent in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size as u32,
            self.height as u32 * self.cell_size as u32,
        )
    }

    pub fn validate(&self) -> Result<()> {
        // The starting snake occupies x = 0..4 on row 0 and heads right.
        ensure!(
            self.width as usize > INITIAL_SNAKE_LENGTH,
            "grid width must be at least {}, got {}",
            INITIAL_SNAKE_LENGTH + 1,
            self.width
        );
        ensure!(self.height >= 1, "grid height must be at least 1");
        ensure!(
            self.cell_count() <= MAX_CELLS,
            "grid {}x{} has {} cells, more than the {} the snake can hold",
            self.width,
            self.height,
            self.cell_count(),
            MAX_CELLS
        );
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(self.speedup_ms > 0, "speed-up step must be positive");
        ensure!(self.reward_increment > 0, "reward increment must be positive");
        ensure!(
            self.min_step_period_ms <= self.initial_step_period_ms,
            "minimum step period {}ms exceeds the initial period {}ms",
            self.min_step_period_ms,
            self.initial_step_period_ms
        );
        Ok(())
    }
}
