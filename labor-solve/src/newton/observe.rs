use super::{Action, Event};

/// Watches Newton steps as they are taken.
///
/// Returning `Some(Action::StopEarly)` ends the iteration after the step just
/// reported; `None` lets it run to the configured step count.
///
/// Any `FnMut(&Event) -> Option<Action>` closure is an observer, and `()`
/// observes nothing.
pub trait Observer {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action>;
}

impl<F> Observer for F
where
    F: FnMut(&Event<'_>) -> Option<Action>,
{
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        self(event)
    }
}

impl Observer for () {
    fn observe(&mut self, _event: &Event<'_>) -> Option<Action> {
        None
    }
}
