//! # Handpose-Runtime
//!
//! Host-facing layer over [`handpose_core`]: the per-tick recognizer state
//! machine with its listener registry, preview posing for authoring tools,
//! and the body-follow anchor used to estimate shoulder placement.
//!
//! Nothing here schedules itself. The host's main loop owns the tick: it
//! refreshes a [`handpose_core::SkeletonFrame`] from its tracking layer and
//! calls [`GestureRecognizer::tick`] once per frame.

pub mod follow;
pub mod listeners;
pub mod preview;
pub mod recognizer;

pub use follow::FollowAnchor;
pub use listeners::GestureListeners;
pub use preview::{hand_preview_position, hand_preview_rotation, pose_skeleton, PreviewMode};
pub use recognizer::{CheckMode, GestureEvent, GestureRecognizer, RecognizerConfig};
