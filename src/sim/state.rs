//! Simulation state and core entity types
//!
//! Everything a run needs lives in [`SimState`], owned by the caller and
//! threaded through [`super::step`]. There are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnSchedule;
use crate::score::RunScore;
use crate::tuning::Tuning;

/// A projectile in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Shot {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Apply gravity, then move (semi-implicit Euler)
    #[inline]
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vel.y += gravity * dt;
        self.pos += self.vel * dt;
    }
}

/// A falling target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Man {
    pub pos: Vec2,
    /// Vertical speed; negative means falling
    pub fall_speed: f32,
}

impl Man {
    pub fn new(pos: Vec2, fall_speed: f32) -> Self {
        Self { pos, fall_speed }
    }

    /// Horizontal position never changes after spawn
    #[inline]
    pub fn fall(&mut self, dt: f32) {
        self.pos.y += self.fall_speed * dt;
    }
}

/// Slingshot aim state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AimState {
    /// Ball sits in the pouch
    Resting,
    /// Ball is being dragged; `pos` is the ball's (clamped) corner position
    Drawn { pos: Vec2 },
}

impl AimState {
    pub fn is_drawn(&self) -> bool {
        matches!(self, AimState::Drawn { .. })
    }
}

/// Things that happened during a step, for sound/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ManSpawned { pos: Vec2 },
    /// `strength` is the launch speed
    ShotLaunched { strength: f32 },
    ManHit { pos: Vec2 },
    /// A man escaped; `score` is what the wave was worth
    RoundReset { score: u32, highest: u32 },
    SpawnRateIncreased { interval: f32 },
}

/// Complete simulation state (deterministic for a given seed and input trace)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub aim: AimState,
    /// Active shots
    pub shots: Vec<Shot>,
    /// Active men
    pub men: Vec<Man>,
    pub score: RunScore,
    pub schedule: SpawnSchedule,
    /// Whether the pointer was over the pouch on the last aim update
    pub hovering_pouch: bool,
    /// Events raised by the most recent step
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    elapsed: f64,
    frames: u64,
    shots_fired: u64,
    men_spawned: u64,
}

impl SimState {
    /// New run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let schedule = SpawnSchedule::new(&tuning);
        Self {
            seed,
            tuning,
            aim: AimState::Resting,
            shots: Vec::new(),
            men: Vec::new(),
            score: RunScore::new(),
            schedule,
            hovering_pouch: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            elapsed: 0.0,
            frames: 0,
            shots_fired: 0,
            men_spawned: 0,
        }
    }

    /// Where the ball is drawn this frame (corner, not centre)
    pub fn ball_pos(&self) -> Vec2 {
        match self.aim {
            AimState::Resting => self.tuning.pouch_origin(),
            AimState::Drawn { pos } => pos,
        }
    }

    /// Simulated seconds since the run started
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn shots_fired(&self) -> u64 {
        self.shots_fired
    }

    pub fn men_spawned(&self) -> u64 {
        self.men_spawned
    }

    pub(crate) fn record_frame(&mut self, dt: f32) {
        self.elapsed += f64::from(dt);
        self.frames += 1;
    }

    pub(crate) fn record_shot(&mut self, shot: Shot) {
        self.shots.push(shot);
        self.shots_fired += 1;
    }

    pub(crate) fn record_spawn(&mut self, man: Man) {
        self.men.push(man);
        self.men_spawned += 1;
    }
}
