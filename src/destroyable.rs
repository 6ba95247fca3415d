// implemented by owners of host resources (subscriptions, scheduled timers) that must be released explicitly
pub trait Destroyable {
    fn destroy(&mut self);
}
