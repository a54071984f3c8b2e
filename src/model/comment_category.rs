use serde::{Deserialize, Serialize};

pub const PERFECT_COMMENT: &str = "Amazing! You got the highest possible score!";
pub const ZERO_COMMENT: &str =
    "Oops - You've lost every round! You might want to look at the hints!";

/// Editorial classification of a finished game, driving the comment shown in
/// the stats dialog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CommentCategory {
    Perfect,
    Zero,
    Neutral,
}

impl CommentCategory {
    /// Checked in order: a perfect game wins over an all-zero one, so a game
    /// whose maximum possible score is 0 counts as perfect.
    pub fn classify(total_score: u64, max_possible: u64) -> CommentCategory {
        if total_score == max_possible {
            CommentCategory::Perfect
        } else if total_score == 0 {
            CommentCategory::Zero
        } else {
            CommentCategory::Neutral
        }
    }

    pub fn comment(&self) -> &'static str {
        match self {
            CommentCategory::Perfect => PERFECT_COMMENT,
            CommentCategory::Zero => ZERO_COMMENT,
            CommentCategory::Neutral => "",
        }
    }

    /// Background of the comment label; `None` keeps the dialog background.
    pub fn highlight_colour(&self) -> Option<&'static str> {
        match self {
            CommentCategory::Perfect => Some("#D5E8D4"),
            CommentCategory::Zero => Some("#F8CECC"),
            CommentCategory::Neutral => None,
        }
    }

    pub fn hides_best_score(&self) -> bool {
        matches!(self, CommentCategory::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_order() {
        assert_eq!(CommentCategory::classify(20, 20), CommentCategory::Perfect);
        assert_eq!(CommentCategory::classify(0, 0), CommentCategory::Perfect);
        assert_eq!(CommentCategory::classify(0, 30), CommentCategory::Zero);
        assert_eq!(CommentCategory::classify(47, 97), CommentCategory::Neutral);
    }

    #[test]
    fn test_neutral_has_no_comment_or_highlight() {
        assert_eq!(CommentCategory::Neutral.comment(), "");
        assert_eq!(CommentCategory::Neutral.highlight_colour(), None);
        assert!(!CommentCategory::Neutral.hides_best_score());
        assert!(CommentCategory::Zero.hides_best_score());
    }
}
