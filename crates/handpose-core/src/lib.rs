//! # Handpose-Core
//!
//! Core types and geometry for recognizing static hand gestures from VR
//! tracking data (head, shoulders, hands).
//!
//! A gesture is a pair of per-hand pose rules. Each rule bounds the
//! shoulder-to-hand direction (two angles) and the hand's shoulder-relative
//! rotation (three wrapped Euler components). Evaluation is a pure function
//! of the current [`SkeletonFrame`].

pub mod angles;
pub mod bounds;
pub mod error;
pub mod evaluate;
pub mod gesture;
pub mod rule;
pub mod skeleton;
pub mod types;

pub use angles::wrap_rotation;
pub use bounds::*;
pub use error::{Error, Result};
pub use evaluate::*;
pub use gesture::*;
pub use rule::*;
pub use skeleton::*;
pub use types::*;
