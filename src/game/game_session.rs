use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::error::{QuestError, QuestResult};
use crate::model::{RoundOutcome, RoundRecord};

/// Scores of the game currently being played, one entry per finished round.
#[derive(Debug, Clone)]
pub struct GameSession {
    playthrough_id: Uuid,
    started_at: i64,
    rounds_wanted: usize,
    rounds_won: usize,
    scores: Vec<u32>,
    high_scores: Vec<u32>,
}

impl GameSession {
    pub fn new(rounds_wanted: usize) -> QuestResult<Self> {
        if rounds_wanted < 1 {
            return Err(QuestError::invalid_input("a game needs at least one round"));
        }
        let session = Self {
            playthrough_id: Uuid::new_v4(),
            started_at: Utc::now().timestamp(),
            rounds_wanted,
            rounds_won: 0,
            scores: Vec::with_capacity(rounds_wanted),
            high_scores: Vec::with_capacity(rounds_wanted),
        };
        debug!(
            target: "game_session",
            "Started playthrough {} at {} ({} rounds)",
            session.playthrough_id,
            session.started_at,
            rounds_wanted
        );
        Ok(session)
    }

    pub fn playthrough_id(&self) -> Uuid {
        self.playthrough_id
    }

    /// Unix timestamp, in seconds.
    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    pub fn rounds_wanted(&self) -> usize {
        self.rounds_wanted
    }

    pub fn rounds_won(&self) -> usize {
        self.rounds_won
    }

    pub fn rounds_played(&self) -> usize {
        self.scores.len()
    }

    pub fn rounds_remaining(&self) -> usize {
        self.rounds_wanted.saturating_sub(self.rounds_played())
    }

    pub fn is_complete(&self) -> bool {
        self.rounds_remaining() == 0
    }

    pub fn record_round(&mut self, outcome: RoundOutcome) -> QuestResult<()> {
        if self.is_complete() {
            return Err(QuestError::invalid_input(format!(
                "all {} rounds have already been played",
                self.rounds_wanted
            )));
        }
        if outcome.score > outcome.high_score {
            return Err(QuestError::invalid_input(format!(
                "score {} exceeds the round's high score {}",
                outcome.score, outcome.high_score
            )));
        }
        self.scores.push(outcome.score);
        self.high_scores.push(outcome.high_score);
        if outcome.won {
            self.rounds_won += 1;
        }
        debug!(
            target: "game_session",
            "Round {}/{} recorded: {:?}",
            self.rounds_played(),
            self.rounds_wanted,
            outcome
        );
        Ok(())
    }

    pub fn snapshot(&self) -> RoundRecord {
        RoundRecord::new(
            self.rounds_won,
            self.scores.clone(),
            self.high_scores.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rounds() -> Vec<RoundOutcome> {
        vec![
            RoundOutcome::new(0, 20, false),
            RoundOutcome::new(15, 19, true),
            RoundOutcome::new(16, 18, true),
            RoundOutcome::new(0, 20, false),
            RoundOutcome::new(16, 20, true),
        ]
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(GameSession::new(0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_records_rounds_in_order() {
        let mut session = GameSession::new(5).unwrap();
        for outcome in sample_rounds() {
            session.record_round(outcome).unwrap();
        }
        assert!(session.is_complete());
        assert_eq!(
            session.snapshot(),
            RoundRecord::new(3, vec![0, 15, 16, 0, 16], vec![20, 19, 18, 20, 20])
        );
    }

    #[test]
    fn test_no_rounds_past_the_end() {
        let mut session = GameSession::new(1).unwrap();
        session.record_round(RoundOutcome::new(3, 5, true)).unwrap();
        let err = session.record_round(RoundOutcome::new(3, 5, true)).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn test_score_above_high_score_rejected() {
        let mut session = GameSession::new(2).unwrap();
        assert!(session
            .record_round(RoundOutcome::new(21, 20, true))
            .is_err());
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.rounds_remaining(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = GameSession::new(3).unwrap();
        session.record_round(RoundOutcome::new(4, 10, false)).unwrap();
        let snapshot = session.snapshot();
        session.record_round(RoundOutcome::new(9, 10, true)).unwrap();
        assert_eq!(snapshot.rounds_played(), 1);
        assert_eq!(session.rounds_played(), 2);
        assert_eq!(session.rounds_won(), 1);
    }
}
