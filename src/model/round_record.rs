use serde::{Deserialize, Serialize};

/// Snapshot of a game's per-round data, handed to the statistics computation.
///
/// `scores` and `high_scores` are expected to line up one entry per round.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub rounds_won: usize,
    pub scores: Vec<u32>,
    pub high_scores: Vec<u32>,
}

impl RoundRecord {
    pub fn new(rounds_won: usize, scores: Vec<u32>, high_scores: Vec<u32>) -> Self {
        Self {
            rounds_won,
            scores,
            high_scores,
        }
    }

    pub fn rounds_played(&self) -> usize {
        self.scores.len()
    }
}
