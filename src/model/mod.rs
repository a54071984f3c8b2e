mod app_command;
mod app_event;
mod comment_category;
mod round_outcome;
mod round_record;
mod screen;
mod statistics_report;

pub use app_command::AppCommand;
pub use app_event::AppEvent;
pub use comment_category::{CommentCategory, PERFECT_COMMENT, ZERO_COMMENT};
pub use round_outcome::RoundOutcome;
pub use round_record::RoundRecord;
pub use screen::{Dialog, Screen};
pub use statistics_report::{StatisticsReport, BEST_SCORE_UNAVAILABLE};
