//! Game balance table
//!
//! Every gameplay number lives here so a run can be reproduced (or rebalanced)
//! from a single value. Defaults come from [`crate::consts`]; a JSON table may
//! override any subset of fields.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Aim ===
    /// Slingshot fork centre; shots fly toward it on release
    pub slingshot_origin: Vec2,
    /// Pouch offset below the origin
    pub pouch_drop: f32,
    /// Grab radius around the pouch
    pub grab_radius: f32,
    /// Half ball size (sprite centre offset and drag overscan)
    pub ball_half_size: f32,
    /// Launch speed per unit of draw distance
    pub launch_power: f32,
    /// Slingshot string anchors
    pub string_anchors: [Vec2; 2],

    // === Projectiles ===
    pub gravity: f32,
    pub shot_margin: f32,

    // === Targets ===
    pub baseline_y: f32,
    pub hit_radius: f32,
    pub spawn_y: f32,
    pub spawn_x_offset: f32,
    pub fall_speed_min: f32,
    pub fall_speed_spread: f32,

    // === Difficulty ramp ===
    pub initial_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub ramp_period: f32,
    pub ramp_factor: f32,
    /// Restore the initial spawn interval whenever a round resets
    pub reset_ramp_on_miss: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        let [left, right] = STRING_ANCHORS;
        Self {
            slingshot_origin: Vec2::new(SLINGSHOT_ORIGIN.0, SLINGSHOT_ORIGIN.1),
            pouch_drop: POUCH_DROP,
            grab_radius: GRAB_RADIUS,
            ball_half_size: BALL_HALF_SIZE,
            launch_power: LAUNCH_POWER,
            string_anchors: [Vec2::new(left.0, left.1), Vec2::new(right.0, right.1)],

            gravity: GRAVITY,
            shot_margin: SHOT_MARGIN,

            baseline_y: BASELINE_Y,
            hit_radius: HIT_RADIUS,
            spawn_y: SPAWN_Y,
            spawn_x_offset: SPAWN_X_OFFSET,
            fall_speed_min: FALL_SPEED_MIN,
            fall_speed_spread: FALL_SPEED_SPREAD,

            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            ramp_period: RAMP_PERIOD,
            ramp_factor: RAMP_FACTOR,
            reset_ramp_on_miss: false,
        }
    }
}

impl Tuning {
    /// Resting ball position (the pouch)
    #[inline]
    pub fn pouch_origin(&self) -> Vec2 {
        self.slingshot_origin - Vec2::new(0.0, self.pouch_drop)
    }

    /// Parse a (possibly partial) JSON table over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("slingshot_origin.x", self.slingshot_origin.x),
            ("slingshot_origin.y", self.slingshot_origin.y),
            ("pouch_drop", self.pouch_drop),
            ("launch_power", self.launch_power),
            ("gravity", self.gravity),
            ("baseline_y", self.baseline_y),
            ("spawn_y", self.spawn_y),
            ("spawn_x_offset", self.spawn_x_offset),
            ("fall_speed_min", self.fall_speed_min),
            ("fall_speed_spread", self.fall_speed_spread),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite { field });
        }

        let positive = [
            ("grab_radius", self.grab_radius),
            ("hit_radius", self.hit_radius),
            ("ramp_period", self.ramp_period),
            ("min_spawn_interval", self.min_spawn_interval),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| !(*v > 0.0 && v.is_finite())) {
            return Err(TuningError::NotPositive { field, value });
        }

        let timers = [
            ("min_spawn_interval", self.min_spawn_interval),
            ("ramp_period", self.ramp_period),
        ];
        if let Some(&(field, value)) = timers.iter().find(|(_, v)| *v < SPAWN_INTERVAL_LIMIT) {
            return Err(TuningError::TooShort { field, value });
        }

        if self.ball_half_size < 0.0 || self.shot_margin < 0.0 {
            let (field, value) = if self.ball_half_size < 0.0 {
                ("ball_half_size", self.ball_half_size)
            } else {
                ("shot_margin", self.shot_margin)
            };
            return Err(TuningError::NotPositive { field, value });
        }

        if !(self.ramp_factor > 0.0 && self.ramp_factor <= 1.0) {
            return Err(TuningError::RampFactor(self.ramp_factor));
        }

        if !(self.initial_spawn_interval >= self.min_spawn_interval)
            || !self.initial_spawn_interval.is_finite()
        {
            return Err(TuningError::IntervalBelowFloor {
                initial: self.initial_spawn_interval,
                floor: self.min_spawn_interval,
            });
        }

        Ok(())
    }
}

/// Why a tuning table was rejected
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    NotFinite { field: &'static str },
    NotPositive { field: &'static str, value: f32 },
    /// Timer period under [`SPAWN_INTERVAL_LIMIT`]
    TooShort { field: &'static str, value: f32 },
    RampFactor(f32),
    IntervalBelowFloor { initial: f32, floor: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid tuning json: {err}"),
            Self::NotFinite { field } => write!(f, "{field} must be finite"),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::TooShort { field, value } => write!(
                f,
                "{field} must be at least {SPAWN_INTERVAL_LIMIT}s, got {value}"
            ),
            Self::RampFactor(factor) => {
                write!(f, "ramp_factor must be in (0, 1], got {factor}")
            }
            Self::IntervalBelowFloor { initial, floor } => write!(
                f,
                "initial_spawn_interval {initial} is below min_spawn_interval {floor}"
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.pouch_origin(), Vec2::new(348.0, 68.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": -500.0, "reset_ramp_on_miss": true }"#)
            .expect("partial table should parse");
        assert_eq!(tuning.gravity, -500.0);
        assert!(tuning.reset_ramp_on_miss);
        assert_eq!(tuning.hit_radius, HIT_RADIUS);
        assert_eq!(tuning.slingshot_origin, Vec2::new(348.0, 100.0));
    }

    #[test]
    fn test_rejects_bad_ramp_factor() {
        let err = Tuning::from_json(r#"{ "ramp_factor": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::RampFactor(f) if f == 1.5));
    }

    #[test]
    fn test_rejects_interval_below_floor() {
        let err = Tuning::from_json(r#"{ "initial_spawn_interval": 0.001 }"#).unwrap_err();
        assert!(matches!(err, TuningError::IntervalBelowFloor { .. }));
    }

    #[test]
    fn test_rejects_vanishing_spawn_interval() {
        let err = Tuning::from_json(
            r#"{ "min_spawn_interval": 1e-9, "initial_spawn_interval": 1e-9 }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TuningError::TooShort { field: "min_spawn_interval", .. }
        ));

        let err = Tuning::from_json(r#"{ "ramp_period": 1e-6 }"#).unwrap_err();
        assert!(err.to_string().contains("ramp_period"));

        assert!(Tuning::from_json(r#"{ "min_spawn_interval": 0.001 }"#).is_ok());
    }

    #[test]
    fn test_rejects_zero_hit_radius() {
        let tuning = Tuning {
            hit_radius: 0.0,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("hit_radius"));
    }

    #[test]
    fn test_parse_error_has_source() {
        use std::error::Error;
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.source().is_some());
    }
}
