mod channel;

pub use channel::{Channel, EventEmitter, EventObserver, Unsubscriber};

/// Stateful receiver of events, wired up with
/// [`EventObserver::subscribe_handler`].
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
