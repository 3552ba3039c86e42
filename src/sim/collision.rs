//! Shot/man impact detection
//!
//! Hits are a plain centre-distance test. A shot is never consumed by a hit,
//! so one shot may take down several men.

use glam::Vec2;

use super::state::Shot;
use super::vector::distance;

/// Index of the first shot (in set order) within `radius` of `target`,
/// inclusive
pub fn first_impact(target: Vec2, shots: &[Shot], radius: f32) -> Option<usize> {
    shots
        .iter()
        .position(|shot| distance(shot.pos, target) <= radius)
}
