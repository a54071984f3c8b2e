mod destroyable;
pub mod error;
pub mod events;
pub mod game;
pub mod model;
pub mod ui;

pub use destroyable::Destroyable;
pub use error::{QuestError, QuestResult};

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use test_context::TestContext;

    static INIT_LOGGER: Once = Once::new();

    pub struct UsingLogger;

    impl TestContext for UsingLogger {
        fn setup() -> UsingLogger {
            INIT_LOGGER.call_once(|| {
                env_logger::builder().is_test(true).init();
            });
            UsingLogger
        }
    }
}
