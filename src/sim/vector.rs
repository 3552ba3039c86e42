//! 2D vector helpers
//!
//! Thin value operations over [`glam::Vec2`]. Everything here is pure; nothing
//! mutates its arguments.
//!
//! Zero-length policy: [`normalize`] returns [`Vec2::ZERO`] for vectors whose
//! length is zero (or not finite) instead of producing NaN components.
//! [`try_normalize`] exposes the same check as an `Option`.

use glam::Vec2;

pub type Vector2 = Vec2;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

#[inline]
pub fn scale(v: Vec2, k: f32) -> Vec2 {
    v * k
}

/// Unit vector in the direction of `v`, or zero when `v` has no direction
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Unit vector in the direction of `v`, or `None` when `v` has no direction
#[inline]
pub fn try_normalize(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
