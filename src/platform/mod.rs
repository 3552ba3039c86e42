//! Platform abstraction layer
//!
//! Turns what a windowing backend reports into simulation input:
//! - Pointer position in window coordinates (origin top-left) → play-area
//!   coordinates (origin bottom-left)
//! - Raw button-down state → press/release edges
//! - Monotonic timestamps → clamped frame deltas

use glam::Vec2;

use crate::consts::MAX_FRAME_DT;
use crate::sim::TickInput;

/// Raw per-frame sample from the host window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInput {
    /// Pointer in window pixels, origin top-left
    pub pointer: Vec2,
    pub button_down: bool,
    /// Window size in pixels
    pub window: Vec2,
}

/// Derives button edges by remembering last frame's button state
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    was_down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one raw sample into a [`TickInput`]
    pub fn sample(&mut self, raw: &RawInput) -> TickInput {
        let down = raw.button_down;
        let input = TickInput {
            pointer: Vec2::new(raw.pointer.x, raw.window.y - raw.pointer.y),
            pressed: down,
            just_pressed: down && !self.was_down,
            just_released: !down && self.was_down,
            screen: raw.window,
        };
        self.was_down = down;
        input
    }
}

/// Frame delta source with a spiral-of-death guard
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Seconds since the previous call, clamped to `[0, max_dt]`.
    /// The first call returns 0.
    pub fn tick(&mut self, now_secs: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now_secs - last) as f32,
            None => 0.0,
        };
        self.last = Some(now_secs);
        dt.clamp(0.0, self.max_dt)
    }
}
