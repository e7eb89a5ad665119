//! Score tally.

/// Running score. Stays at or above zero unless negative scores are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: i64,
    allow_negative: bool,
}

impl ScoreKeeper {
    pub fn new(allow_negative: bool) -> Self {
        Self {
            score: 0,
            allow_negative,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(i64::from(points));
    }

    pub fn penalize(&mut self, points: u32) {
        self.score = self.score.saturating_sub(i64::from(points));
        if !self.allow_negative && self.score < 0 {
            self.score = 0;
        }
    }
}
