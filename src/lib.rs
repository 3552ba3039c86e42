//! Slingshot - A single-screen slingshot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aim, projectiles, targets, spawning)
//! - `renderer`: Per-frame render snapshot handed to the presentation layer
//! - `platform`: Raw input/clock adaptation for the host window
//! - `score`: Run score and in-memory high score
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod score;
pub mod sim;
pub mod tuning;

pub use renderer::{CursorHint, RenderState, StringSegment};
pub use score::RunScore;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Default play area (the original window size)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Slingshot fork centre, in play-area coordinates
    pub const SLINGSHOT_ORIGIN: (f32, f32) = (348.0, 100.0);
    /// Pouch sits this far below the slingshot origin
    pub const POUCH_DROP: f32 = 32.0;
    /// Pointer must be this close to the pouch to grab the ball
    pub const GRAB_RADIUS: f32 = 32.0;
    /// Half the ball sprite size; also the drag overscan margin
    pub const BALL_HALF_SIZE: f32 = 16.0;
    /// Launch speed per unit of draw distance
    pub const LAUNCH_POWER: f32 = 10.0;
    /// Anchor points of the two slingshot strings
    pub const STRING_ANCHORS: [(f32, f32); 2] = [(310.0, 100.0), (418.0, 100.0)];

    /// Downward acceleration applied to shots (units/s²)
    pub const GRAVITY: f32 = -980.0;
    /// Shots are pruned once this far outside the play area
    pub const SHOT_MARGIN: f32 = 32.0;

    /// Men below this height have escaped
    pub const BASELINE_Y: f32 = -120.0;
    /// Shot/man centre distance that counts as a hit
    pub const HIT_RADIUS: f32 = 64.0;

    /// Spawn height, above the visible area
    pub const SPAWN_Y: f32 = 900.0;
    /// Horizontal spawn offset (half the man sprite)
    pub const SPAWN_X_OFFSET: f32 = 32.0;
    /// Slowest descent speed (units/s)
    pub const FALL_SPEED_MIN: f32 = 48.0;
    /// Random extra descent speed on top of the minimum
    pub const FALL_SPEED_SPREAD: f32 = 100.0;

    /// Starting spawn interval (seconds)
    pub const INITIAL_SPAWN_INTERVAL: f32 = 2.0;
    /// Spawn interval never drops below this
    pub const MIN_SPAWN_INTERVAL: f32 = 0.01;
    /// Shortest timer period a tuning table may ask for
    pub const SPAWN_INTERVAL_LIMIT: f32 = 1e-3;
    /// Seconds between difficulty ramps
    pub const RAMP_PERIOD: f32 = 10.0;
    /// Multiplier applied to the spawn interval at each ramp
    pub const RAMP_FACTOR: f32 = 0.75;
}
