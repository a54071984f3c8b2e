pub mod app_state;
mod game_session;
pub mod round_statistics;
pub mod settings;

pub use app_state::{AppState, Transition};
pub use game_session::GameSession;
pub use round_statistics::{compute, compute_record};
pub use settings::Settings;
