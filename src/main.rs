use colourquest::events::Channel;
use colourquest::game::{AppState, Settings};
use colourquest::model::{AppCommand, AppEvent, Dialog, RoundOutcome};
use colourquest::ui::ScreenProjection;
use colourquest::{Destroyable, QuestResult};
use log::{error, info};

// rounds from the stats walkthrough: (score, high score, won)
const DEMO_ROUNDS: [(u32, u32, bool); 5] = [
    (0, 20, false),
    (15, 19, true),
    (16, 18, true),
    (0, 20, false),
    (16, 20, true),
];

fn init_logging() {
    env_logger::init();
}

fn show(projection: &ScreenProjection) {
    println!("{}\n{}", projection.render(), "-".repeat(40));
}

fn run() -> QuestResult<()> {
    let settings = Settings::load();
    if Settings::is_debug_mode() {
        info!("Debug mode, settings: {:?}", settings);
    }

    let (app_event_emitter, app_event_observer) = Channel::<AppEvent>::new();
    let projection = ScreenProjection::new(&app_event_observer, settings.show_comment_highlight);
    let mut app_state = AppState::new(settings, app_event_emitter);
    show(&projection.borrow());

    app_state.handle_command(AppCommand::StartGame(DEMO_ROUNDS.len()))?;
    app_state.handle_command(AppCommand::OpenDialog(Dialog::Hints))?;
    show(&projection.borrow());
    app_state.handle_command(AppCommand::CloseDialog(Dialog::Hints))?;

    for (score, high_score, won) in DEMO_ROUNDS {
        app_state.handle_command(AppCommand::RecordRound(RoundOutcome::new(
            score, high_score, won,
        )))?;
    }

    app_state.handle_command(AppCommand::OpenDialog(Dialog::Stats))?;
    show(&projection.borrow());
    app_state.handle_command(AppCommand::CloseDialog(Dialog::Stats))?;

    app_state.handle_command(AppCommand::EndGame)?;
    show(&projection.borrow());

    projection.borrow_mut().destroy();
    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
