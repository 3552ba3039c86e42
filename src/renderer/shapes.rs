//! Line geometry for the slingshot strings

use glam::Vec2;
use serde::Serialize;

use crate::tuning::Tuning;

/// A straight line from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StringSegment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Both strings, from their fixed anchors to the centre of the ball sprite
/// whose corner is at `ball`
pub fn slingshot_strings(tuning: &Tuning, ball: Vec2) -> [StringSegment; 2] {
    let centre = ball + Vec2::splat(tuning.ball_half_size);
    tuning.string_anchors.map(|from| StringSegment { from, to: centre })
}
