//! Game state module - the session and its per-tick update rule
//!
//! A [`GameState`] owns the snake, the apple, score/reward bookkeeping and the
//! current step period. The host drives it:
//!
//! 1. [`GameState::init`] once (and again to restart),
//! 2. [`GameState::step`] every `step_period_ms()` milliseconds,
//! 3. [`GameState::on_key_down`] / [`GameState::change_direction`] between
//!    steps.
//!
//! Game over is reported through
//! [`GameEvents::game_over`](crate::host::GameEvents::game_over) and the
//! returned [`StepOutcome`]; the session itself keeps simulating if the host
//! keeps ticking.

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::host::{Canvas, Host, RandomSource};
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{ArrowKey, Direction, Position, COLOR_APPLE, COLOR_BACKGROUND, COLOR_SNAKE};

/// What a single [`GameState::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub ate_apple: bool,
    /// Head out of bounds or on the body after this tick.
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    snake: Snake,
    apple: Position,
    score: u32,
    /// Reward granted for the next apple.
    next_reward: u32,
    step_period_ms: u32,
    rng: R,
    initialized: bool,
    /// Steps taken since the last `init`.
    ticks: u64,
}

impl GameState<SimpleRng> {
    /// Classic 40x40 session with apples drawn from `SimpleRng::new(seed)`.
    pub fn new(seed: u32) -> Self {
        Self::from_valid_config(GameConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_config(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config, rng))
    }

    fn from_valid_config(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            snake: Snake::new(config.cell_count()),
            apple: Position::default(),
            score: 0,
            next_reward: config.initial_reward,
            step_period_ms: config.initial_step_period_ms,
            rng,
            initialized: false,
            ticks: 0,
        }
    }

    /// Reset to the starting layout, place an apple, paint, and report score 0.
    pub fn init<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.step_period_ms = self.config.initial_step_period_ms;
        self.next_reward = self.config.initial_reward;
        self.score = 0;
        self.ticks = 0;
        self.teleport_apple();
        self.snake = Snake::new(self.config.cell_count());
        self.initialized = true;

        self.repaint(host);
        host.score_changed(self.score);
    }

    /// Advance the session by one tick.
    ///
    /// `_timestamp` is the host's frame time; scheduling belongs to the host.
    /// Does nothing before the first [`GameState::init`].
    pub fn step<H: Host + ?Sized>(&mut self, _timestamp: u32, host: &mut H) -> StepOutcome {
        if !self.initialized {
            return StepOutcome::default();
        }
        self.ticks += 1;

        let mut outcome = StepOutcome::default();
        if self.will_eat_apple() {
            match self.snake.grow() {
                Ok(()) => {
                    outcome.ate_apple = true;
                    self.teleport_apple();
                    self.speed_up(host);
                    self.update_score();
                    debug!(
                        score = self.score,
                        length = self.snake.length(),
                        "apple eaten"
                    );
                    host.score_changed(self.score);
                }
                Err(err) => {
                    warn!(
                        position = ?err.element(),
                        capacity = self.snake.capacity(),
                        "snake is full, moving without growth"
                    );
                    self.snake.advance();
                }
            }
        } else {
            self.snake.advance();
        }

        if self.snake.is_out_of_bounds(self.config.width, self.config.height)
            || self.snake.eats_itself()
        {
            outcome.game_over = true;
            debug!(head = ?self.snake.head_position(), ticks = self.ticks, "game over");
            host.game_over();
        }

        self.repaint(host);
        outcome
    }

    /// Apply a new heading unless it reverses the current one.
    ///
    /// Returns whether the heading was applied; body positions never move here.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        self.snake.turn(requested)
    }

    pub fn on_key_down(&mut self, key: ArrowKey) -> bool {
        self.change_direction(key.direction())
    }

    pub fn will_eat_apple(&self) -> bool {
        self.snake.next_head_position() == self.apple
    }

    fn speed_up<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.step_period_ms > self.config.min_step_period_ms {
            self.step_period_ms = self
                .step_period_ms
                .saturating_sub(self.config.speedup_ms)
                .max(self.config.min_step_period_ms);
            debug!(period_ms = self.step_period_ms, "speed up");
            host.step_period_updated(self.step_period_ms);
        }
    }

    fn update_score(&mut self) {
        self.score += self.next_reward;
        self.next_reward += self.config.reward_increment;
    }

    /// Cells under the snake are not excluded.
    fn teleport_apple(&mut self) {
        let x = self.rng.random(self.config.width as u32);
        let y = self.rng.random(self.config.height as u32);
        self.apple = Position::new(x as i32, y as i32);
    }

    fn repaint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let cell = self.config.cell_size as i32;
        let (canvas_w, canvas_h) = self.config.canvas_size();

        canvas.set_fill_style(COLOR_BACKGROUND);
        canvas.fill_rect(0, 0, canvas_w as i32, canvas_h as i32);

        canvas.set_fill_style(COLOR_SNAKE);
        for seg in self.snake.segments() {
            canvas.fill_rect(seg.x * cell, seg.y * cell, cell, cell);
        }

        canvas.set_fill_style(COLOR_APPLE);
        canvas.fill_rect(self.apple.x * cell, self.apple.y * cell, cell, cell);

        canvas.fill();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn next_reward(&self) -> u32 {
        self.next_reward
    }

    /// Milliseconds until the host should call `step` again.
    pub fn step_period_ms(&self) -> u32 {
        self.step_period_ms
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `snap` in place, reusing its body allocation.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        snap.width = self.config.width;
        snap.height = self.config.height;
        snap.body.extend(self.snake.body());
        snap.head = self.snake.head_position();
        snap.direction = self.snake.direction();
        snap.apple = self.apple;
        snap.length = self.snake.length();
        snap.score = self.score;
        snap.next_reward = self.next_reward;
        snap.step_period_ms = self.step_period_ms;
        snap.ticks = self.ticks;
        snap.initialized = self.initialized;
    }
}
