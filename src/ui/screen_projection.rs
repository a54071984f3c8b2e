use itertools::Itertools;
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

use super::{HintsDialog, StatsDialog, StatsLine};
use crate::destroyable::Destroyable;
use crate::events::{EventHandler, EventObserver, Unsubscriber};
use crate::model::{AppEvent, Screen};

pub const GAME_TITLE: &str = "Colour Quest";

/// Text rendition of whatever the player currently sees, kept in step with
/// the application state by listening to its events.
pub struct ScreenProjection {
    screen: Screen,
    rounds_label: Option<String>,
    hints: Option<Vec<String>>,
    stats: Option<Vec<StatsLine>>,
    highlight_comment: bool,
    subscription: Option<Unsubscriber<AppEvent>>,
}

impl Destroyable for ScreenProjection {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl ScreenProjection {
    pub fn new(
        app_event_observer: &EventObserver<AppEvent>,
        highlight_comment: bool,
    ) -> Rc<RefCell<Self>> {
        let projection = Rc::new(RefCell::new(Self {
            screen: Screen::MainMenu,
            rounds_label: None,
            hints: None,
            stats: None,
            highlight_comment,
            subscription: None,
        }));
        let subscription = app_event_observer.subscribe_handler(projection.clone());
        projection.borrow_mut().subscription = Some(subscription);
        projection
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn hints(&self) -> Option<&[String]> {
        self.hints.as_deref()
    }

    pub fn stats(&self) -> Option<&[StatsLine]> {
        self.stats.as_deref()
    }

    pub fn render(&self) -> String {
        let mut blocks = vec![];
        match self.screen {
            Screen::MainMenu => blocks.push(format!("{GAME_TITLE}\n[Play]")),
            Screen::Playing => {
                let mut header = GAME_TITLE.to_string();
                if let Some(label) = &self.rounds_label {
                    header.push('\n');
                    header.push_str(label);
                }
                blocks.push(header);
            }
        }
        if let Some(hints) = &self.hints {
            blocks.push(hints.join("\n\n"));
        }
        if let Some(stats) = &self.stats {
            blocks.push(stats.iter().map(|line| line.text.as_str()).join("\n"));
        }
        blocks.join("\n\n")
    }
}

impl EventHandler<AppEvent> for ScreenProjection {
    fn handle_event(&mut self, event: &AppEvent) {
        trace!(target: "screen_projection", "Handling event: {:?}", event);
        match event {
            AppEvent::ScreenChanged(screen) => {
                self.screen = *screen;
                if *screen == Screen::MainMenu {
                    self.rounds_label = None;
                    self.hints = None;
                    self.stats = None;
                }
            }
            AppEvent::GameStarted { rounds_wanted, .. } => {
                self.rounds_label = Some(format!("Round 1 of {rounds_wanted}"));
            }
            AppEvent::RoundRecorded {
                rounds_played,
                rounds_remaining,
                ..
            } => {
                let total = rounds_played + rounds_remaining;
                self.rounds_label = Some(if *rounds_remaining == 0 {
                    format!("Game over ({total} rounds played)")
                } else {
                    format!("Round {} of {total}", rounds_played + 1)
                });
            }
            AppEvent::HintsOpened => self.hints = Some(HintsDialog::lines()),
            AppEvent::HintsClosed => self.hints = None,
            AppEvent::StatsOpened(report) => {
                self.stats = Some(StatsDialog::lines(report, self.highlight_comment))
            }
            AppEvent::StatsClosed => self.stats = None,
        }
    }
}
