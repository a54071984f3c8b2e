use log::{debug, trace};

use super::round_statistics;
use super::settings::Settings;
use super::GameSession;
use crate::error::{QuestError, QuestResult};
use crate::events::EventEmitter;
use crate::model::{AppCommand, AppEvent, Dialog, RoundOutcome, Screen, StatisticsReport};

/// Whether a command changed anything. Guards reject commands silently, the
/// way a disabled button ignores clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

/// Which screen is showing and which dialogs are open on it. Presentation
/// code follows along through the emitted [`AppEvent`]s.
pub struct AppState {
    screen: Screen,
    hints_open: bool,
    stats_open: bool,
    session: Option<GameSession>,
    settings: Settings,
    app_event_emitter: EventEmitter<AppEvent>,
}

impl AppState {
    pub fn new(settings: Settings, app_event_emitter: EventEmitter<AppEvent>) -> Self {
        Self {
            screen: Screen::MainMenu,
            hints_open: false,
            stats_open: false,
            session: None,
            settings,
            app_event_emitter,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn hints_open(&self) -> bool {
        self.hints_open
    }

    pub fn stats_open(&self) -> bool {
        self.stats_open
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_dialog_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::Hints => self.hints_open,
            Dialog::Stats => self.stats_open,
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> QuestResult<Transition> {
        trace!(target: "app_state", "Handling command: {:?}", command);
        let transition = match command {
            AppCommand::StartGame(rounds_wanted) => self.start_game(rounds_wanted)?,
            AppCommand::RecordRound(outcome) => self.record_round(outcome)?,
            AppCommand::OpenDialog(Dialog::Hints) => self.open_hints(),
            AppCommand::OpenDialog(Dialog::Stats) => self.open_stats()?,
            AppCommand::CloseDialog(dialog) => self.close_dialog(dialog),
            AppCommand::EndGame => self.end_game(),
        };
        if transition == Transition::Ignored {
            debug!(target: "app_state", "Command ignored on {:?}", self.screen);
        }
        Ok(transition)
    }

    /// Starts a game with the round count from the settings.
    pub fn start_default_game(&mut self) -> QuestResult<Transition> {
        let rounds_wanted = self.settings.rounds_wanted;
        self.handle_command(AppCommand::StartGame(rounds_wanted))
    }

    fn start_game(&mut self, rounds_wanted: usize) -> QuestResult<Transition> {
        if self.screen != Screen::MainMenu {
            return Ok(Transition::Ignored);
        }
        let session = GameSession::new(rounds_wanted)?;
        let playthrough_id = session.playthrough_id();
        let started_at = session.started_at();
        self.session = Some(session);
        self.set_screen(Screen::Playing);
        self.app_event_emitter.emit(AppEvent::GameStarted {
            playthrough_id,
            started_at,
            rounds_wanted,
        });
        Ok(Transition::Applied)
    }

    fn record_round(&mut self, outcome: RoundOutcome) -> QuestResult<Transition> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Transition::Ignored);
        };
        session.record_round(outcome)?;
        let event = AppEvent::RoundRecorded {
            outcome,
            rounds_played: session.rounds_played(),
            rounds_remaining: session.rounds_remaining(),
        };
        self.app_event_emitter.emit(event);
        Ok(Transition::Applied)
    }

    fn open_hints(&mut self) -> Transition {
        if self.screen != Screen::Playing || self.hints_open {
            return Transition::Ignored;
        }
        self.hints_open = true;
        self.app_event_emitter.emit(AppEvent::HintsOpened);
        Transition::Applied
    }

    fn open_stats(&mut self) -> QuestResult<Transition> {
        if self.screen != Screen::Playing || self.stats_open {
            return Ok(Transition::Ignored);
        }
        let report = self.current_report()?;
        self.stats_open = true;
        self.app_event_emitter.emit(AppEvent::StatsOpened(report));
        Ok(Transition::Applied)
    }

    /// Fresh statistics for the game in progress.
    pub fn current_report(&self) -> QuestResult<StatisticsReport> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| QuestError::invalid_input("no game in progress"))?;
        round_statistics::compute_record(&session.snapshot())
    }

    fn close_dialog(&mut self, dialog: Dialog) -> Transition {
        let open = match dialog {
            Dialog::Hints => &mut self.hints_open,
            Dialog::Stats => &mut self.stats_open,
        };
        if !*open {
            return Transition::Ignored;
        }
        *open = false;
        self.app_event_emitter.emit(match dialog {
            Dialog::Hints => AppEvent::HintsClosed,
            Dialog::Stats => AppEvent::StatsClosed,
        });
        Transition::Applied
    }

    fn end_game(&mut self) -> Transition {
        if self.screen != Screen::Playing {
            return Transition::Ignored;
        }
        // dialogs belong to the play screen and go with it
        self.close_dialog(Dialog::Hints);
        self.close_dialog(Dialog::Stats);
        if let Some(session) = self.session.take() {
            debug!(
                target: "app_state",
                "Ending playthrough {} (started {}) after {} rounds",
                session.playthrough_id(),
                session.started_at(),
                session.rounds_played()
            );
        }
        self.set_screen(Screen::MainMenu);
        Transition::Applied
    }

    fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.app_event_emitter.emit(AppEvent::ScreenChanged(screen));
    }
}
