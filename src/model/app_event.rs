use uuid::Uuid;

use super::{RoundOutcome, Screen, StatisticsReport};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ScreenChanged(Screen),
    GameStarted {
        playthrough_id: Uuid,
        /// Unix timestamp, in seconds.
        started_at: i64,
        rounds_wanted: usize,
    },
    RoundRecorded {
        outcome: RoundOutcome,
        rounds_played: usize,
        rounds_remaining: usize,
    },
    HintsOpened,
    HintsClosed,
    StatsOpened(StatisticsReport),
    StatsClosed,
}
