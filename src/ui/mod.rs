mod hints_dialog;
mod screen_projection;
mod stats_dialog;

pub use hints_dialog::{HintsDialog, HINTS_HEADING};
pub use screen_projection::{ScreenProjection, GAME_TITLE};
pub use stats_dialog::{
    StatsDialog, StatsLine, DIALOG_BACKGROUND, ROUND_STATS_HEADING, STATS_HEADING,
};
