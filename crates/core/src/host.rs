//! Host boundary.
//!
//! The core never draws, schedules or rolls dice on its own. Everything it
//! needs from the outside world comes through the traits below, which the
//! host implements and passes into [`GameState`](crate::GameState) calls.

use crate::types::Rgb;

/// Pixel-space drawing primitives.
///
/// A frame is a sequence of `set_fill_style`/`fill_rect` calls terminated by
/// `fill`, which commits it to the display.
pub trait Canvas {
    fn set_fill_style(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn fill(&mut self);
}

/// Notifications fired synchronously from `init` and `step`.
pub trait GameEvents {
    fn score_changed(&mut self, _score: u32) {}
    fn step_period_updated(&mut self, _period_ms: u32) {}
    /// Fired on every tick that ends with the head outside the grid or on the
    /// body. Not latched.
    fn game_over(&mut self) {}
}

/// Uniform integers, used only for apple placement.
pub trait RandomSource {
    /// A value in `[0, max)`. `max` is always positive.
    fn random(&mut self, max: u32) -> u32;
}

/// Everything `init` and `step` call back into.
pub trait Host: Canvas + GameEvents {}

impl<T: Canvas + GameEvents + ?Sized> Host for T {}

/// One recorded host callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    SetFillStyle(Rgb),
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Fill,
    ScoreChanged(u32),
    StepPeriodUpdated(u32),
    GameOver,
}

/// Host that records every callback in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Drain the log, leaving the host empty.
    pub fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn scores(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::ScoreChanged(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn step_periods(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::StepPeriodUpdated(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn game_overs(&self) -> usize {
        self.count(HostCall::GameOver)
    }

    /// Number of committed frames.
    pub fn frames(&self) -> usize {
        self.count(HostCall::Fill)
    }

    fn count(&self, call: HostCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl Canvas for RecordingHost {
    fn set_fill_style(&mut self, color: Rgb) {
        self.calls.push(HostCall::SetFillStyle(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(HostCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill(&mut self) {
        self.calls.push(HostCall::Fill);
    }
}

impl GameEvents for RecordingHost {
    fn score_changed(&mut self, score: u32) {
        self.calls.push(HostCall::ScoreChanged(score));
    }

    fn step_period_updated(&mut self, period_ms: u32) {
        self.calls.push(HostCall::StepPeriodUpdated(period_ms));
    }

    fn game_over(&mut self) {
        self.calls.push(HostCall::GameOver);
    }
}

/// Host that ignores everything (benchmarks, headless runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl Canvas for NullHost {
    fn set_fill_style(&mut self, _color: Rgb) {}
    fn fill_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) {}
    fn fill(&mut self) {}
}

impl GameEvents for NullHost {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_host_keeps_call_order() {
        let mut host = RecordingHost::new();
        host.set_fill_style(Rgb::new(1, 2, 3));
        host.fill_rect(0, 0, 10, 10);
        host.fill();
        host.score_changed(10);
        host.game_over();

        assert_eq!(
            host.calls(),
            &[
                HostCall::SetFillStyle(Rgb::new(1, 2, 3)),
                HostCall::FillRect {
                    x: 0,
                    y: 0,
                    width: 10,
                    height: 10
                },
                HostCall::Fill,
                HostCall::ScoreChanged(10),
                HostCall::GameOver,
            ]
        );
        assert_eq!(host.frames(), 1);
        assert_eq!(host.scores(), vec![10]);
        assert_eq!(host.game_overs(), 1);

        let drained = host.take();
        assert_eq!(drained.len(), 5);
        assert!(host.calls().is_empty());
    }
}
