//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Snake rules: the segment ring, the session state,
//! and the per-tick update. It never draws, sleeps or reads input; the host
//! supplies those through the traits in [`host`]:
//!
//! - **Deterministic**: a seeded [`SimpleRng`] fixes every apple position
//! - **Testable**: [`RecordingHost`] captures each paint call and notification
//! - **Portable**: terminal, canvas or headless hosts all drive the same API
//! - **Allocation-free ticks**: segments live in a fixed-capacity inline ring
//!
//! # Module Structure
//!
//! - [`config`]: grid size and speed/reward tuning, with validation
//! - [`game_state`]: the session, `init`/`step`, direction changes
//! - [`host`]: `Canvas`, `GameEvents` and `RandomSource` capabilities
//! - [`rng`]: seeded LCG and a scripted source for tests
//! - [`snake`]: the body ring buffer (advance, grow, collisions)
//! - [`snapshot`]: serializable copy of a session
//!
//! # Game Rules
//!
//! - The snake starts as four cells on row 0 heading right
//! - Each tick it moves one cell; reaching the apple makes it one cell longer
//! - Apple rewards start at 10 and grow by 10 per apple (10, 20, 30, ...)
//! - Each apple shortens the tick period by 25ms while it is above 50ms
//! - Leaving the grid or hitting the body reports game over on that tick
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, RecordingHost};
//! use tui_snake_core::types::ArrowKey;
//!
//! let mut game = GameState::new(12345);
//! let mut host = RecordingHost::new();
//! game.init(&mut host);
//!
//! game.on_key_down(ArrowKey::Down);
//! let outcome = game.step(0, &mut host);
//!
//! assert!(!outcome.game_over);
//! assert_eq!(host.scores()[0], 0);
//! ```

pub mod config;
pub mod game_state;
pub mod host;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{GameState, StepOutcome};
pub use host::{Canvas, GameEvents, Host, HostCall, NullHost, RandomSource, RecordingHost};
pub use rng::{ScriptedRng, SimpleRng};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
