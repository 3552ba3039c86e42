//! Render snapshot
//!
//! The simulation never draws. After each step it hands the presentation layer
//! a [`RenderState`]: plain positions, scores and line segments, captured once
//! the step is complete.

pub mod shapes;

use glam::Vec2;
use serde::Serialize;

use crate::score::RunScore;
use crate::sim::{GameEvent, SimState};
pub use shapes::{StringSegment, slingshot_strings};

/// Which system cursor the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CursorHint {
    Arrow,
    /// Over the pouch, or dragging the ball
    Hand,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    /// Ball sprite corner
    pub ball: Vec2,
    pub shots: Vec<Vec2>,
    pub men: Vec<Vec2>,
    pub score: u32,
    pub highest: u32,
    pub strings: [StringSegment; 2],
    pub cursor: CursorHint,
    pub events: Vec<GameEvent>,
}

impl RenderState {
    pub fn capture(state: &SimState) -> Self {
        let ball = state.ball_pos();
        let cursor = if state.aim.is_drawn() || state.hovering_pouch {
            CursorHint::Hand
        } else {
            CursorHint::Arrow
        };
        Self {
            ball,
            shots: state.shots.iter().map(|s| s.pos).collect(),
            men: state.men.iter().map(|m| m.pos).collect(),
            score: state.score.current,
            highest: state.score.highest,
            strings: slingshot_strings(&state.tuning, ball),
            cursor,
            events: state.events.clone(),
        }
    }

    /// Text for the score corner
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn run_score(&self) -> RunScore {
        RunScore {
            current: self.score,
            highest: self.highest,
        }
    }

    /// Text for the high score corner; hidden until a wave has scored
    pub fn highest_text(&self) -> Option<String> {
        self.run_score()
            .has_highest()
            .then(|| format!("Hi-Score: {}", self.highest))
    }
}
