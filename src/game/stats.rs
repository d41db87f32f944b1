//! Session statistics across rounds

use super::{RoundState, RoundStatus};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Winning guess count → number of rounds won with it
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Count a finished round; unfinished rounds are ignored
    pub fn record(&mut self, round: &RoundState) {
        match round.status() {
            RoundStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                *self
                    .guess_distribution
                    .entry(round.current_row())
                    .or_insert(0) += 1;
            }
            RoundStatus::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
            RoundStatus::Playing | RoundStatus::Submitting => {}
        }
    }

    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
