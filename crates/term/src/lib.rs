//! Terminal host for the Snake core.
//!
//! The core paints through the [`Canvas`](crate::core::Canvas) trait in pixel
//! space. This crate implements that boundary for a terminal:
//!
//! - [`PixelCanvas`] rasterizes paint calls back onto grid cells
//! - [`TermHost`] pairs the canvas with a [`Hud`] fed by game notifications
//! - [`GameView`] composes board, border, side panel and overlays into a
//!   [`FrameBuffer`]
//! - [`TerminalRenderer`] flushes framebuffers with crossterm, diffing frames
//!
//! Everything except the renderer is pure and unit-tested.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod hud;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, PANEL_WIDTH};
pub use hud::{Hud, TermHost};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
