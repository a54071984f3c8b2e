use serde::Serialize;

use super::CommentCategory;

pub const BEST_SCORE_UNAVAILABLE: &str = "n/a";

/// Derived view of a finished (or in-progress) game. Built fresh each time
/// the stats dialog opens and never stored.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Percentage in `0.0..=100.0`, unrounded.
    pub success_rate: f64,
    pub total_score: u64,
    pub max_possible: u64,
    pub best_score: u32,
    /// Unrounded mean score per round.
    pub average_score: f64,
    pub comment: String,
    pub category: CommentCategory,
}

impl StatisticsReport {
    /// `rounds_played` must be non-zero; callers validate before building.
    pub(crate) fn new(
        rounds_won: usize,
        rounds_played: usize,
        total_score: u64,
        max_possible: u64,
        best_score: u32,
    ) -> Self {
        let category = CommentCategory::classify(total_score, max_possible);
        Self {
            rounds_played,
            rounds_won,
            success_rate: rounds_won as f64 / rounds_played as f64 * 100.0,
            total_score,
            max_possible,
            best_score,
            average_score: total_score as f64 / rounds_played as f64,
            comment: category.comment().to_string(),
            category,
        }
    }

    pub fn success_rate_rounded(&self) -> u64 {
        round_whole(self.success_rate)
    }

    pub fn average_score_rounded(&self) -> u64 {
        round_whole(self.average_score)
    }

    /// The best score as shown to the player: suppressed to "n/a" when every
    /// round was lost, even though the numeric value is kept.
    pub fn best_score_display(&self) -> String {
        if self.category.hides_best_score() {
            BEST_SCORE_UNAVAILABLE.to_string()
        } else {
            self.best_score.to_string()
        }
    }
}

// halves go to the even neighbour, matching "%.0f" formatting
fn round_whole(value: f64) -> u64 {
    value.round_ties_even() as u64
}
