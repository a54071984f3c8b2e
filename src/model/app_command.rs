use super::{Dialog, RoundOutcome};

#[derive(Debug, Clone)]
pub enum AppCommand {
    StartGame(usize), // rounds wanted
    RecordRound(RoundOutcome),
    OpenDialog(Dialog),
    CloseDialog(Dialog),
    EndGame,
}
