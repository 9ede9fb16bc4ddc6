//! Per-tick gesture recognition state machine.

use serde::{Deserialize, Serialize};

use handpose_core::{GesturePredicate, SkeletonFrame};

use crate::listeners::GestureListeners;

/// The type of check to perform when determining if the gesture is being
/// performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckMode {
    /// Fulfilled only when the gesture is performed exactly as defined
    #[default]
    Standard,
    /// Fulfilled only when the gesture is performed mirrored across the
    /// body axis
    Mirrored,
    /// Fulfilled when either the standard or the mirrored check passes
    StandardOrMirrored,
}

/// The per-tick recognition signal.
///
/// `Start` on the first fulfilled tick, `Held` on every consecutive
/// fulfilled tick after it, `End` on the first unfulfilled tick after a
/// fulfilled one. Idle ticks emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureEvent {
    Start,
    Held,
    End,
}

/// Recognizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecognizerConfig {
    pub check_mode: CheckMode,
}

/// Recognizes whether a skeleton is performing a static gesture, one
/// evaluation per host tick.
///
/// The only state carried across ticks is whether the gesture was performed
/// on the previous one; evaluation itself is a pure function of the frame.
/// Instances are independent and never share or mutate frame or rule data.
pub struct GestureRecognizer {
    config: RecognizerConfig,
    listeners: GestureListeners,
    /// Whether the gesture was performed on the previous tick
    active: bool,
}

impl GestureRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            listeners: GestureListeners::default(),
            active: false,
        }
    }

    /// Whether the gesture was being performed as of the last tick
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn check_mode(&self) -> CheckMode {
        self.config.check_mode
    }

    /// Listener registry for Start/Held/End callbacks
    pub fn listeners_mut(&mut self) -> &mut GestureListeners {
        &mut self.listeners
    }

    /// Evaluate one tick and advance the state machine.
    ///
    /// Transitions: idle and fulfilled emits `Start`; active and fulfilled
    /// emits `Held`; active and unfulfilled emits `End`; idle and
    /// unfulfilled emits nothing. Registered listeners for the emitted
    /// event fire before this returns.
    pub fn tick(
        &mut self,
        predicate: &GesturePredicate,
        frame: &SkeletonFrame,
    ) -> Option<GestureEvent> {
        let fulfilled = check_fulfilled(predicate, frame, self.config.check_mode);

        let event = match (self.active, fulfilled) {
            (false, true) => {
                tracing::trace!(check_mode = ?self.config.check_mode, "gesture started");
                Some(GestureEvent::Start)
            }
            (true, true) => Some(GestureEvent::Held),
            (true, false) => {
                tracing::trace!(check_mode = ?self.config.check_mode, "gesture ended");
                Some(GestureEvent::End)
            }
            (false, false) => None,
        };
        self.active = fulfilled;

        if let Some(event) = event {
            self.listeners.notify(event, predicate);
        }
        event
    }
}

/// Evaluate the predicate under the configured check mode.
///
/// `StandardOrMirrored` ORs both checks; evaluation has no side effects, so
/// the short-circuit order is irrelevant.
fn check_fulfilled(predicate: &GesturePredicate, frame: &SkeletonFrame, mode: CheckMode) -> bool {
    match mode {
        CheckMode::Standard => predicate.is_fulfilled(frame, false),
        CheckMode::Mirrored => predicate.is_fulfilled(frame, true),
        CheckMode::StandardOrMirrored => {
            predicate.is_fulfilled(frame, false) || predicate.is_fulfilled(frame, true)
        }
    }
}
