//! Listener table used to dispatch [`IndicatorEvent`]s.
//!
//! Handlers are registered once at startup. Dispatch is synchronous and follows the registration order,
//! so each handler runs to completion before the next one sees the event.

use heapless::Vec;

use super::{EventKind, IndicatorEvent};
use crate::error::IndicatorError;

/// Event handler, receives the context it mutates and the event
pub type Handler<C> = fn(&mut C, &IndicatorEvent);

pub struct Listener<C> {
    kind: EventKind,
    handler: Handler<C>,
}

// Derived impls would require `C: Clone`
impl<C> Clone for Listener<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Listener<C> {}

pub struct EventListeners<C, const N: usize> {
    listeners: Vec<Listener<C>, N>,
}

impl<C, const N: usize> Default for EventListeners<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> EventListeners<C, N> {
    pub const fn new() -> Self {
        Self { listeners: Vec::new() }
    }

    /// Append a handler for events of `kind`
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler<C>) -> Result<(), IndicatorError> {
        self.listeners
            .push(Listener { kind, handler })
            .map_err(|_| IndicatorError::ListenerTableFull)
    }

    /// Run every handler subscribed to the kind of `event`, in registration order.
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&self, ctx: &mut C, event: &IndicatorEvent) -> usize {
        let kind = event.kind();
        let mut handled = 0;
        for listener in self.listeners.iter().filter(|l| l.kind == kind) {
            (listener.handler)(ctx, event);
            handled += 1;
        }
        if handled == 0 {
            trace!("No listener for {:?}", kind);
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ButtonEvent, ButtonId, LedIndicatorEvent};
    use crate::LedIndicator;

    #[derive(Default)]
    struct Trace {
        calls: [u8; 4],
        len: usize,
    }

    impl Trace {
        fn push(&mut self, id: u8) {
            self.calls[self.len] = id;
            self.len += 1;
        }
    }

    #[test]
    fn test_dispatch_follows_registration_order() {
        let mut listeners: EventListeners<Trace, 4> = EventListeners::new();
        listeners.subscribe(EventKind::Button, |t, _| t.push(1)).unwrap();
        listeners.subscribe(EventKind::LedIndicator, |t, _| t.push(9)).unwrap();
        listeners.subscribe(EventKind::Button, |t, _| t.push(2)).unwrap();

        let mut trace = Trace::default();
        let handled = listeners.dispatch(
            &mut trace,
            &IndicatorEvent::Button(ButtonEvent::press(ButtonId::OutputToggle)),
        );

        assert_eq!(handled, 2);
        assert_eq!(&trace.calls[..trace.len], &[1, 2]);
    }

    #[test]
    fn test_unsubscribed_kind_is_dropped() {
        let mut listeners: EventListeners<Trace, 4> = EventListeners::new();
        listeners.subscribe(EventKind::Button, |t, _| t.push(1)).unwrap();

        let mut trace = Trace::default();
        let event = IndicatorEvent::LedIndicator(LedIndicatorEvent {
            indicator: LedIndicator::CAPS_LOCK,
        });
        assert_eq!(listeners.dispatch(&mut trace, &event), 0);
        assert_eq!(trace.len, 0);
    }

    #[test]
    fn test_full_table() {
        let mut listeners: EventListeners<Trace, 1> = EventListeners::new();
        assert!(listeners.subscribe(EventKind::Button, |_, _| {}).is_ok());
        assert_eq!(
            listeners.subscribe(EventKind::Button, |_, _| {}),
            Err(IndicatorError::ListenerTableFull)
        );
        let mut trace = Trace::default();
        let event = IndicatorEvent::Button(ButtonEvent::press(ButtonId::OutputBle));
        assert_eq!(listeners.dispatch(&mut trace, &event), 1);
    }
}
