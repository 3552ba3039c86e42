//! Slingshot aim state machine
//!
//! Resting → Drawn on a button press over the pouch; Drawn → Resting on the
//! release edge, which launches a shot toward the slingshot origin.

use glam::Vec2;

use super::state::{AimState, Shot};
use super::tick::TickInput;
use super::vector::{distance, scale, subtract, try_normalize};
use crate::tuning::Tuning;

/// Result of one aim update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimUpdate {
    pub state: AimState,
    /// Pointer is over the pouch while resting
    pub hovering: bool,
    /// Shot launched by this update, if any
    pub launched: Option<Shot>,
}

/// Ball position while dragging: pointer minus half the sprite, clamped to
/// the screen plus a half-sprite overscan.
pub fn drawn_position(pointer: Vec2, screen: Vec2, tuning: &Tuning) -> Vec2 {
    let half = tuning.ball_half_size;
    let pos = pointer - Vec2::splat(half);
    pos.clamp(Vec2::splat(-half), screen + Vec2::splat(half))
}

/// Launch velocity for a ball released at `drawn`.
///
/// Returns `None` when the ball sits exactly on the slingshot origin, where
/// there is no direction to fly in.
pub fn launch_velocity(drawn: Vec2, tuning: &Tuning) -> Option<Vec2> {
    let pull = subtract(tuning.slingshot_origin, drawn);
    let dir = try_normalize(pull)?;
    let magnitude = distance(tuning.slingshot_origin, drawn) * tuning.launch_power;
    Some(scale(dir, magnitude))
}

/// Advance the aim state by one frame of input
pub fn update_aim(aim: AimState, input: &TickInput, tuning: &Tuning) -> AimUpdate {
    match aim {
        AimState::Resting => {
            let hovering = distance(input.pointer, tuning.pouch_origin()) <= tuning.grab_radius;
            if hovering && input.just_pressed {
                AimUpdate {
                    state: AimState::Drawn {
                        pos: drawn_position(input.pointer, input.screen, tuning),
                    },
                    hovering,
                    launched: None,
                }
            } else {
                AimUpdate {
                    state: AimState::Resting,
                    hovering,
                    launched: None,
                }
            }
        }
        AimState::Drawn { .. } => {
            let pos = drawn_position(input.pointer, input.screen, tuning);
            if input.just_released {
                let launched = match launch_velocity(pos, tuning) {
                    Some(vel) => Some(Shot::new(pos, vel)),
                    None => {
                        log::debug!("Released on the slingshot origin, no shot");
                        None
                    }
                };
                AimUpdate {
                    state: AimState::Resting,
                    hovering: false,
                    launched,
                }
            } else {
                AimUpdate {
                    state: AimState::Drawn { pos },
                    hovering: false,
                    launched: None,
                }
            }
        }
    }
}
