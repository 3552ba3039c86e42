//! Target set: falling men, baseline misses and hits
//!
//! Men are processed in set order. Each one falls, then:
//! 1. below the baseline → round over, every man is cleared, stop
//! 2. otherwise, if a shot is in range → the man is removed and scores
//!
//! The next set is rebuilt from the survivors rather than removed in place.

use glam::Vec2;

use super::collision::first_impact;
use super::state::{Man, Shot};
use crate::score::RunScore;

/// What happened to the target set this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetOutcome {
    /// Positions of men that were hit
    pub hits: Vec<Vec2>,
    /// Set when a man crossed the baseline: the score that was folded
    pub reset: Option<u32>,
}

/// Advance every man by `dt`, resolving misses and hits
pub fn advance_men(
    men: &mut Vec<Man>,
    shots: &[Shot],
    score: &mut RunScore,
    baseline_y: f32,
    hit_radius: f32,
    dt: f32,
) -> TargetOutcome {
    let mut outcome = TargetOutcome::default();
    let mut survivors = Vec::with_capacity(men.len());

    for mut man in men.drain(..) {
        man.fall(dt);

        if man.pos.y < baseline_y {
            outcome.reset = Some(score.fold());
            survivors.clear();
            break;
        }

        if first_impact(man.pos, shots, hit_radius).is_some() {
            score.award();
            outcome.hits.push(man.pos);
        } else {
            survivors.push(man);
        }
    }

    *men = survivors;
    outcome
}
