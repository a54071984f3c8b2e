use log::trace;

use crate::error::{QuestError, QuestResult};
use crate::model::{RoundRecord, StatisticsReport};

/// Turns the per-round scores of a game into a [`StatisticsReport`].
///
/// Fails with [`QuestError::InvalidInput`] when no rounds were played, when
/// the two score lists differ in length, or when more rounds were won than
/// played. The inputs are only read.
pub fn compute(
    rounds_won: usize,
    scores: &[u32],
    high_scores: &[u32],
) -> QuestResult<StatisticsReport> {
    if scores.is_empty() {
        return Err(QuestError::invalid_input("no rounds have been played"));
    }
    if high_scores.is_empty() {
        return Err(QuestError::invalid_input("high score list is empty"));
    }
    if scores.len() != high_scores.len() {
        return Err(QuestError::invalid_input(format!(
            "{} scores but {} high scores",
            scores.len(),
            high_scores.len()
        )));
    }
    let rounds_played = scores.len();
    if rounds_won > rounds_played {
        return Err(QuestError::invalid_input(format!(
            "{rounds_won} rounds won out of {rounds_played} played"
        )));
    }

    let total_score: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    let max_possible: u64 = high_scores.iter().map(|&s| u64::from(s)).sum();
    // non-empty was checked above
    let best_score = scores.iter().copied().max().unwrap_or_default();

    let report = StatisticsReport::new(
        rounds_won,
        rounds_played,
        total_score,
        max_possible,
        best_score,
    );
    trace!(target: "round_statistics", "Computed report: {:?}", report);
    Ok(report)
}

pub fn compute_record(record: &RoundRecord) -> QuestResult<StatisticsReport> {
    compute(record.rounds_won, &record.scores, &record.high_scores)
}
