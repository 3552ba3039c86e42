//! Run score and high score
//!
//! Lives only for the session; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Score for the current wave plus the best wave seen this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunScore {
    /// Men hit since the last miss
    pub current: u32,
    /// Best `current` recorded at any reset
    pub highest: u32,
}

impl RunScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one hit
    #[inline]
    pub fn award(&mut self) {
        self.current = self.current.saturating_add(1);
    }

    /// Fold the current score into the high score and start over.
    /// Returns the score that was just lost.
    pub fn fold(&mut self) -> u32 {
        let lost = self.current;
        self.highest = self.highest.max(lost);
        self.current = 0;
        lost
    }

    /// Whether the presentation layer has a high score worth showing
    pub fn has_highest(&self) -> bool {
        self.highest > 0
    }
}
