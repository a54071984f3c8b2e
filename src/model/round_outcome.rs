use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub score: u32,
    /// Best score achievable in this round.
    pub high_score: u32,
    pub won: bool,
}

impl RoundOutcome {
    pub fn new(score: u32, high_score: u32, won: bool) -> Self {
        Self {
            score,
            high_score,
            won,
        }
    }
}
