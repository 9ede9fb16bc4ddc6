//! Listener registry for recognizer events.
//!
//! Replaces engine-style multicast events with a plain callback list: the
//! host registers a closure per event kind it cares about, and the
//! recognizer invokes the matching list when a tick emits that event.

use handpose_core::GesturePredicate;

use crate::recognizer::GestureEvent;

type Callback = Box<dyn FnMut(&GesturePredicate)>;

/// Callback lists for the three recognition events.
#[derive(Default)]
pub struct GestureListeners {
    on_start: Vec<Callback>,
    on_held: Vec<Callback>,
    on_end: Vec<Callback>,
}

impl GestureListeners {
    /// Register a callback for one event kind. Callbacks fire in
    /// registration order and receive the gesture that triggered the event.
    pub fn register<F>(&mut self, event: GestureEvent, callback: F)
    where
        F: FnMut(&GesturePredicate) + 'static,
    {
        self.list_for(event).push(Box::new(callback));
    }

    /// Invoke every callback registered for `event`
    pub fn notify(&mut self, event: GestureEvent, gesture: &GesturePredicate) {
        for callback in self.list_for(event) {
            callback(gesture);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_start.is_empty() && self.on_held.is_empty() && self.on_end.is_empty()
    }

    fn list_for(&mut self, event: GestureEvent) -> &mut Vec<Callback> {
        match event {
            GestureEvent::Start => &mut self.on_start,
            GestureEvent::Held => &mut self.on_held,
            GestureEvent::End => &mut self.on_end,
        }
    }
}

impl std::fmt::Debug for GestureListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureListeners")
            .field("on_start", &self.on_start.len())
            .field("on_held", &self.on_held.len())
            .field("on_end", &self.on_end.len())
            .finish()
    }
}
