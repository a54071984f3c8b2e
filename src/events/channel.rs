use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::rc::Rc;

use log::trace;

use super::EventHandler;

pub type Callback<T> = Rc<dyn Fn(&T)>;
type SubscriptionId = u64;

pub struct EventEmitter<T: Debug> {
    channel: Channel<T>,
}

impl<T: Debug> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

pub struct EventObserver<T: Debug> {
    channel: Channel<T>,
}

impl<T: Debug> Clone for EventObserver<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

/// Handle returned by [`EventObserver::subscribe`]. Dropping it does not
/// unsubscribe; call [`Unsubscriber::unsubscribe`] explicitly.
pub struct Unsubscriber<T: Debug> {
    channel: Channel<T>,
    id: SubscriptionId,
}

impl<T: Debug> Unsubscriber<T> {
    pub fn unsubscribe(self) -> bool {
        self.channel.unsubscribe(self.id)
    }
}

pub struct Channel<T: Debug> {
    // ordered so listeners fire in subscription order
    listeners: Rc<RefCell<BTreeMap<SubscriptionId, Callback<T>>>>,
    next_id: Rc<RefCell<SubscriptionId>>,
}

impl<T: Debug> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<T: Debug> Channel<T> {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (EventEmitter<T>, EventObserver<T>) {
        let channel = Channel {
            listeners: Rc::new(RefCell::new(BTreeMap::new())),
            next_id: Rc::new(RefCell::new(0)),
        };
        (
            EventEmitter {
                channel: channel.clone(),
            },
            EventObserver { channel },
        )
    }

    fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id += 1;
            id
        };
        self.listeners.borrow_mut().insert(id, Rc::new(callback));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.borrow_mut().remove(&id).is_some()
    }

    fn emit(&self, data: &T) {
        // snapshot so a listener may subscribe or unsubscribe while handling
        let listeners: Vec<Callback<T>> = self.listeners.borrow().values().cloned().collect();
        trace!(target: "events", "Emitting event to {} listeners: {:?}", listeners.len(), data);
        for listener in listeners {
            listener(data);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: Debug> EventEmitter<T> {
    pub fn emit(&self, data: T) {
        self.channel.emit(&data);
    }

    pub fn listener_count(&self) -> usize {
        self.channel.listener_count()
    }
}

impl<T: Debug> EventObserver<T> {
    pub fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        let id = self.channel.subscribe(callback);
        Unsubscriber {
            channel: self.channel.clone(),
            id,
        }
    }

    /// Routes every event into `handler`. The handler must not be borrowed
    /// elsewhere while events are being emitted.
    pub fn subscribe_handler<H>(&self, handler: Rc<RefCell<H>>) -> Unsubscriber<T>
    where
        H: EventHandler<T> + 'static,
    {
        self.subscribe(move |event| handler.borrow_mut().handle_event(event))
    }
}
