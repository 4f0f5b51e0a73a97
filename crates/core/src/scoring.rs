//! Scoring - turns row-filled notifications into points
//!
//! Every cleared row is worth a fixed multiplier (100 by default), so clearing
//! `n` rows at once adds `n * multiplier`.

use crate::events::FieldObserver;
use crate::types::DEFAULT_SCORE_MULTIPLIER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    rows: u32,
    multiplier: u32,
}

impl Scoreboard {
    pub fn new(multiplier: u32) -> Self {
        Self {
            score: 0,
            rows: 0,
            multiplier,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Points for clearing `count` rows in one landing
    pub fn points_for(&self, count: u32) -> u32 {
        count.saturating_mul(self.multiplier)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.rows = 0;
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_MULTIPLIER)
    }
}

impl FieldObserver for Scoreboard {
    fn on_row_filled(&mut self, count: u32) {
        self.score = self.score.saturating_add(self.points_for(count));
        self.rows = self.rows.saturating_add(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_multiplier_is_one_hundred() {
        let mut board = Scoreboard::default();
        board.on_row_filled(1);
        assert_eq!(board.score(), 100);
        board.on_row_filled(3);
        assert_eq!(board.score(), 400);
        assert_eq!(board.rows(), 4);
    }

    #[test]
    fn custom_multiplier() {
        let mut board = Scoreboard::new(40);
        board.on_row_filled(2);
        assert_eq!(board.score(), 80);
        board.reset();
        assert_eq!(board.score(), 0);
        assert_eq!(board.rows(), 0);
    }

    #[test]
    fn other_notifications_do_not_score() {
        let mut board = Scoreboard::default();
        board.on_top_row_filled();
        assert_eq!(board.score(), 0);
    }
}
