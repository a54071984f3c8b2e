// implemented by subscribers holding an Unsubscriber; the channel keeps the callback alive until destroy()
pub trait Destroyable {
    fn destroy(&mut self);
}
