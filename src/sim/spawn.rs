//! Target spawn scheduling and difficulty ramp
//!
//! Two timers share the simulation clock:
//! - the spawn timer fires once when (re)started and then every `interval`
//! - the ramp timer fires every `ramp_period`, shrinking `interval` and
//!   restarting the spawn timer
//!
//! A restart (after a missed round) waits a full interval before its first
//! spawn.
//!
//! Both are plain accumulators advanced by [`SpawnSchedule::advance`], so a
//! given sequence of frame deltas always yields the same firings.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Man;
use crate::consts::SPAWN_INTERVAL_LIMIT;
use crate::tuning::Tuning;

/// A single timer firing, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnTick {
    Spawn,
    /// The spawn interval shrank to the given value
    Ramp(f32),
}

/// Spawn/ramp timer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnSchedule {
    /// Seconds between spawns; only ever shrinks
    pub interval: f32,
    /// Seconds since the spawn timer last fired
    pub elapsed: f32,
    /// Seconds since the ramp timer last fired
    pub ramp_elapsed: f32,
    /// Spawn timer was (re)started and owes its immediate firing
    pending: bool,
    min_interval: f32,
    ramp_period: f32,
    ramp_factor: f32,
}

impl SpawnSchedule {
    /// Periods are clamped to [`SPAWN_INTERVAL_LIMIT`] even for an
    /// unvalidated table
    pub fn new(tuning: &Tuning) -> Self {
        let min_interval = tuning.min_spawn_interval.max(SPAWN_INTERVAL_LIMIT);
        Self {
            interval: tuning.initial_spawn_interval.max(min_interval),
            elapsed: 0.0,
            ramp_elapsed: 0.0,
            pending: true,
            min_interval,
            ramp_period: tuning.ramp_period.max(SPAWN_INTERVAL_LIMIT),
            ramp_factor: tuning.ramp_factor,
        }
    }

    /// Restart both timers at the given interval. The next spawn comes one
    /// full interval later.
    pub fn restart(&mut self, interval: f32) {
        self.interval = interval.max(self.min_interval);
        self.elapsed = 0.0;
        self.ramp_elapsed = 0.0;
        self.pending = false;
    }

    /// Apply one ramp step: shrink the interval and restart the spawn timer
    pub fn ramp(&mut self) -> f32 {
        self.interval = (self.interval * self.ramp_factor).max(self.min_interval);
        self.elapsed = 0.0;
        self.pending = true;
        self.interval
    }

    /// Advance both timers by `dt`, appending every firing to `out`.
    ///
    /// Firings inside a long step are resolved in time order. When the ramp
    /// and a spawn are due at the same instant the ramp goes first; its
    /// restart supplies the spawn.
    pub fn advance(&mut self, dt: f32, out: &mut Vec<SpawnTick>) {
        let mut remaining = dt.max(0.0);
        loop {
            if self.pending {
                self.pending = false;
                out.push(SpawnTick::Spawn);
            }

            // a whole period no longer registers against what is left
            if remaining > 0.0 && remaining - self.interval.min(self.ramp_period) == remaining {
                self.ramp_elapsed += remaining;
                self.elapsed += remaining;
                break;
            }

            let to_ramp = self.ramp_period - self.ramp_elapsed;
            let to_spawn = self.interval - self.elapsed;

            if to_ramp <= remaining && to_ramp <= to_spawn {
                let step = to_ramp.max(0.0);
                remaining -= step;
                self.ramp_elapsed = 0.0;
                let interval = self.ramp();
                out.push(SpawnTick::Ramp(interval));
            } else if to_spawn <= remaining {
                let step = to_spawn.max(0.0);
                remaining -= step;
                self.ramp_elapsed += step;
                self.elapsed = 0.0;
                self.pending = true;
            } else {
                self.ramp_elapsed += remaining;
                self.elapsed += remaining;
                break;
            }
        }
    }
}

/// Roll a new man just above the visible area
pub fn spawn_man<R: Rng + ?Sized>(rng: &mut R, screen_width: f32, tuning: &Tuning) -> Man {
    let x = rng.random::<f32>() * screen_width - tuning.spawn_x_offset;
    let speed = tuning.fall_speed_min + rng.random::<f32>() * tuning.fall_speed_spread;
    Man::new(Vec2::new(x, tuning.spawn_y), -speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn schedule() -> SpawnSchedule {
        SpawnSchedule::new(&Tuning::default())
    }

    fn count_spawns(ticks: &[SpawnTick]) -> usize {
        ticks.iter().filter(|t| matches!(t, SpawnTick::Spawn)).count()
    }

    #[test]
    fn test_fires_immediately() {
        let mut s = schedule();
        let mut out = Vec::new();
        s.advance(0.0, &mut out);
        assert_eq!(out, vec![SpawnTick::Spawn]);

        out.clear();
        s.advance(0.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_spawns_every_interval() {
        let mut s = schedule();
        let mut out = Vec::new();
        // t = 0, 2, 4, 6
        for _ in 0..26 {
            s.advance(0.25, &mut out);
        }
        assert_eq!(s.ramp_elapsed, 6.5);
        assert_eq!(count_spawns(&out), 4);
    }

    #[test]
    fn test_ramp_scenario() {
        let mut s = schedule();
        assert_eq!(s.interval, 2.0);

        let mut out = Vec::new();
        for _ in 0..40 {
            s.advance(0.25, &mut out);
        }
        assert!((s.interval - 1.5).abs() < 1e-6);
        assert!(out.contains(&SpawnTick::Ramp(1.5)));

        for _ in 0..40 {
            s.advance(0.25, &mut out);
        }
        assert!((s.interval - 1.125).abs() < 1e-6);
    }

    #[test]
    fn test_ramp_restarts_spawn_timer() {
        let mut s = schedule();
        let mut out = Vec::new();
        // spawns at 0, 2, 4, 6, 8; ramp at 10 restarts with its own spawn
        s.advance(10.0, &mut out);
        assert_eq!(count_spawns(&out), 6);
        assert_eq!(out.last(), Some(&SpawnTick::Spawn));
        assert_eq!(s.elapsed, 0.0);

        out.clear();
        s.advance(1.5, &mut out);
        assert_eq!(out, vec![SpawnTick::Spawn]);
    }

    #[test]
    fn test_long_step_keeps_chronological_order() {
        let mut s = schedule();
        let mut out = Vec::new();
        s.advance(20.0, &mut out);
        let ramps: Vec<usize> = out
            .iter()
            .enumerate()
            .filter(|(_, t)| matches!(t, SpawnTick::Ramp(_)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(ramps.len(), 2);
        // 0,2,4,6,8 then ramp, 10,11.5,...,19 then ramp, 20
        assert_eq!(ramps[0], 5);
        assert_eq!(count_spawns(&out[ramps[0]..ramps[1]]), 7);
        assert_eq!(out.last(), Some(&SpawnTick::Spawn));
    }

    #[test]
    fn test_interval_floor() {
        let mut s = schedule();
        for _ in 0..100 {
            s.ramp();
            assert!(s.interval >= 0.01);
        }
        assert_eq!(s.interval, 0.01);
    }

    #[test]
    fn test_at_floor_spawns_every_tick() {
        let mut s = schedule();
        for _ in 0..100 {
            s.ramp();
        }
        let mut out = Vec::new();
        s.advance(0.0, &mut out);
        out.clear();
        // 60 Hz frame is longer than the 0.01 s floor
        s.advance(1.0 / 60.0, &mut out);
        assert!(count_spawns(&out) >= 1);
    }

    #[test]
    fn test_restart_resets_interval() {
        let mut s = schedule();
        s.ramp();
        s.ramp();
        s.restart(2.0);
        assert_eq!(s.interval, 2.0);
        let mut out = Vec::new();
        s.advance(0.0, &mut out);
        assert!(out.is_empty());

        s.advance(1.75, &mut out);
        assert!(out.is_empty());
        s.advance(0.25, &mut out);
        assert_eq!(out, vec![SpawnTick::Spawn]);
        assert_eq!(s.ramp_elapsed, 2.0);
    }

    #[test]
    fn test_vanishing_interval_still_terminates() {
        // bypasses validation on purpose
        let tuning = Tuning {
            min_spawn_interval: 1e-9,
            initial_spawn_interval: 1e-9,
            ..Default::default()
        };
        let mut s = SpawnSchedule::new(&tuning);
        assert_eq!(s.interval, SPAWN_INTERVAL_LIMIT);

        let mut out = Vec::new();
        s.advance(0.1, &mut out);
        assert!((100..=101).contains(&count_spawns(&out)));
    }

    #[test]
    fn test_huge_step_at_floor_terminates() {
        let mut s = schedule();
        for _ in 0..100 {
            s.ramp();
        }
        let mut out = Vec::new();
        // 0.01 is below the f32 spacing around 1e7
        s.advance(1.0e7, &mut out);
        assert_eq!(out.first(), Some(&SpawnTick::Spawn));
        assert!(s.elapsed >= 1.0e7);
    }

    #[test]
    fn test_spawn_man_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let man = spawn_man(&mut rng, 800.0, &tuning);
            assert!(man.pos.x >= -32.0 && man.pos.x < 768.0);
            assert_eq!(man.pos.y, 900.0);
            assert!(man.fall_speed <= -48.0 && man.fall_speed > -148.0);
        }
    }
}
