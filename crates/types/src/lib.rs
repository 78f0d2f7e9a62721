//! Core types module - shared data structures and constants
//!
//! This module defines the geometry vocabulary and the fixed constants used
//! throughout the workspace. Everything here is plain data, usable from the
//! simulation core, the terminal front end, and tests alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 40 columns (x in `0..40`)
//! - **Height**: 40 rows (y in `0..40`)
//! - **Cell size**: 10 pixels, so the host canvas is 400x400
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_STEP_PERIOD_MS` | 300 | Tick period at the start of a game |
//! | `MIN_STEP_PERIOD_MS` | 50 | No speed-up once the period is at or below this |
//! | `SPEEDUP_MS` | 25 | Period decrease per apple |
//! | `INITIAL_REWARD` | 10 | Points for the first apple |
//! | `REWARD_INCREMENT` | 10 | Growth of the reward after every apple |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, GRID_WIDTH, GRID_HEIGHT};
//!
//! let p = Position::new(3, 0);
//! assert_eq!(p.moved(Direction::Right), Position::new(4, 0));
//! assert!(Direction::Up.is_opposite(Direction::Down));
//!
//! assert_eq!(GRID_WIDTH, 40);
//! assert_eq!(GRID_HEIGHT, 40);
//! ```

use serde::{Deserialize, Serialize};

/// Grid width in cells (40 columns)
pub const GRID_WIDTH: u16 = 40;

/// Grid height in cells (40 rows)
pub const GRID_HEIGHT: u16 = 40;

/// Pixel size of one grid cell on the host canvas
pub const CELL_SIZE: u16 = 10;

/// Storage reserved for snake segments: every cell of the largest grid.
pub const MAX_CELLS: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Tick period when a game starts (300ms)
pub const INITIAL_STEP_PERIOD_MS: u32 = 300;

/// Speed-up stops once the period is at or below this value (50ms)
pub const MIN_STEP_PERIOD_MS: u32 = 50;

/// Period decrease applied after each apple (25ms)
pub const SPEEDUP_MS: u32 = 25;

/// Reward granted for the first apple
pub const INITIAL_REWARD: u32 = 10;

/// Amount the reward grows after every apple
pub const REWARD_INCREMENT: u32 = 10;

/// Segment count of a freshly initialized snake
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Canvas background color (0x000000)
pub const COLOR_BACKGROUND: Rgb = Rgb::from_u32(0x000000);

/// Snake segment color (0x00ff00)
pub const COLOR_SNAKE: Rgb = Rgb::from_u32(0x00ff00);

/// Apple color (0xff0000)
pub const COLOR_APPLE: Rgb = Rgb::from_u32(0xff0000);


/// A cell coordinate on the logical plane.
///
/// Coordinates are signed: a head that leaves the grid is still a valid
/// `Position`, and bounds are checked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by exactly one cell along `direction`.
    ///
    /// Up decrements `y`, Down increments `y`, Left decrements `x`,
    /// Right increments `x`.
    pub fn moved(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }

    /// Whether this position lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.x < width as i32 && self.y >= 0 && self.y < height as i32
    }
}

/// Snake heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// True only for the Up/Down and Left/Right pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert!(Direction::Left.is_opposite(Direction::Right));
    /// assert!(!Direction::Left.is_opposite(Direction::Up));
    /// assert!(!Direction::Left.is_opposite(Direction::Left));
    /// ```
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Directional key codes delivered by the host's input dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// The heading this key requests.
    pub fn direction(self) -> Direction {
        match self {
            ArrowKey::Up => Direction::Up,
            ArrowKey::Down => Direction::Down,
            ArrowKey::Left => Direction::Left,
            ArrowKey::Right => Direction::Right,
        }
    }
}

/// Player actions produced by input mapping.
///
/// Arrow actions reach the core; pause and restart are handled by the host,
/// which owns tick scheduling and session setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading
    Turn(ArrowKey),
    /// Stop/resume ticking
    Pause,
    /// Re-run `init` on the session
    Restart,
}

impl GameAction {
    /// Parse an action from its text form (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{ArrowKey, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(ArrowKey::Up)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Turn(ArrowKey::Up)),
            "down" => Some(GameAction::Turn(ArrowKey::Down)),
            "left" => Some(GameAction::Turn(ArrowKey::Left)),
            "right" => Some(GameAction::Turn(ArrowKey::Right)),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(key) => key.direction().as_str(),
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` value; the top byte is ignored.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}
