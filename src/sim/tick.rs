//! Per-frame simulation step
//!
//! Fixed order each frame:
//! 1. spawn/ramp timers (may add men)
//! 2. aim state machine (may add a shot)
//! 3. projectiles
//! 4. targets (may reset the round)
//! 5. render snapshot

use glam::Vec2;

use super::aim::update_aim;
use super::projectile::advance_shots;
use super::spawn::{SpawnTick, spawn_man};
use super::state::{GameEvent, SimState};
use super::targets::advance_men;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::RenderState;

/// Input sample for a single frame, already in play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Pointer position (origin bottom-left)
    pub pointer: Vec2,
    /// Button is held. Not read by [`step`]: the aim machine runs on the
    /// edges alone. Kept for hosts that drive their own UI from it.
    pub pressed: bool,
    /// Button went down this frame
    pub just_pressed: bool,
    /// Button went up this frame
    pub just_released: bool,
    /// Play area size (width, height)
    pub screen: Vec2,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            pressed: false,
            just_pressed: false,
            just_released: false,
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }
}

/// Advance the simulation by `dt` seconds and return what to draw
pub fn step(state: &mut SimState, input: &TickInput, dt: f32) -> RenderState {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.events.clear();
    state.record_frame(dt);

    // Spawning
    let mut ticks = Vec::new();
    state.schedule.advance(dt, &mut ticks);
    for tick in ticks {
        match tick {
            SpawnTick::Spawn => {
                let man = spawn_man(&mut state.rng, input.screen.x, &state.tuning);
                log::trace!("Spawned man at {:?} (speed {})", man.pos, man.fall_speed);
                state.events.push(GameEvent::ManSpawned { pos: man.pos });
                state.record_spawn(man);
            }
            SpawnTick::Ramp(interval) => {
                log::info!("Spawn interval now {:.3}s", interval);
                state.events.push(GameEvent::SpawnRateIncreased { interval });
            }
        }
    }

    // Aim
    let aim = update_aim(state.aim, input, &state.tuning);
    state.aim = aim.state;
    state.hovering_pouch = aim.hovering;
    if let Some(shot) = aim.launched {
        let strength = shot.vel.length();
        log::debug!("Launched shot from {:?} at speed {:.1}", shot.pos, strength);
        state.events.push(GameEvent::ShotLaunched { strength });
        state.record_shot(shot);
    }

    // Projectiles
    advance_shots(
        &mut state.shots,
        state.tuning.gravity,
        input.screen,
        state.tuning.shot_margin,
        dt,
    );

    // Targets
    let outcome = advance_men(
        &mut state.men,
        &state.shots,
        &mut state.score,
        state.tuning.baseline_y,
        state.tuning.hit_radius,
        dt,
    );
    for pos in outcome.hits {
        state.events.push(GameEvent::ManHit { pos });
    }
    if let Some(score) = outcome.reset {
        let highest = state.score.highest;
        log::info!("Round over: scored {} (best {})", score, highest);
        state.events.push(GameEvent::RoundReset { score, highest });
        if state.tuning.reset_ramp_on_miss {
            state.schedule.restart(state.tuning.initial_spawn_interval);
        }
    }

    RenderState::capture(state)
}
