use serde::Serialize;

use crate::types::{Direction, Position};

/// Plain copy of a session, for HUDs, summaries and JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Tail first, head last.
    pub body: Vec<Position>,
    pub head: Position,
    pub direction: Direction,
    pub apple: Position,
    pub length: usize,
    pub score: u32,
    pub next_reward: u32,
    pub step_period_ms: u32,
    pub ticks: u64,
    pub initialized: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.body.clear();
        self.head = Position::default();
        self.direction = Direction::Right;
        self.apple = Position::default();
        self.length = 0;
        self.score = 0;
        self.next_reward = 0;
        self.step_period_ms = 0;
        self.ticks = 0;
        self.initialized = false;
    }

    /// Whether the head currently sits inside the grid.
    pub fn head_in_bounds(&self) -> bool {
        self.head.in_bounds(self.width, self.height)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            body: Vec::new(),
            head: Position::default(),
            direction: Direction::Right,
            apple: Position::default(),
            length: 0,
            score: 0,
            next_reward: 0,
            step_period_ms: 0,
            ticks: 0,
            initialized: false,
        }
    }
}
