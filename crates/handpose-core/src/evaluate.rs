//! Shoulder-relative pose derivation.
//!
//! Converts a hand's world transform into the angular quantities a
//! [`crate::rule::HandPoseRule`] constrains: two direction angles for the
//! shoulder-to-hand vector and three wrapped Euler components for the
//! hand's rotation relative to its shoulder.

use nalgebra::Vector3;

use crate::angles::wrap_rotation;
use crate::types::{EulerAngles, JointPose};

/// The derived angular state of one hand relative to its shoulder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    /// Angle of the shoulder-to-hand direction in the left/right-front/back
    /// plane, degrees. Zero when the hand is directly in front of the
    /// shoulder's local +Z.
    pub horizontal: f64,
    /// Elevation of the shoulder-to-hand direction, degrees. Zero when the
    /// hand is directly above the shoulder, -90 directly in front.
    pub vertical: f64,
    /// Hand rotation in the shoulder's frame, each component wrapped onto
    /// (-180, 180]
    pub rotation: EulerAngles,
}

impl HandAngles {
    /// Derive the angular state from world-space hand and shoulder poses.
    ///
    /// The hands are tracked independently of the estimated shoulders, so
    /// both the direction and the rotation are first moved into the
    /// shoulder's local frame; otherwise the hand's yaw would change with
    /// the player's body rotation.
    pub fn from_joints(hand: &JointPose, shoulder: &JointPose) -> Self {
        let world_offset = hand.position.to_vector() - shoulder.position.to_vector();
        let dir = normalize_or_zero(shoulder.rotation.inverse().rotate(world_offset));

        let horizontal = dir.x.atan2(dir.z).to_degrees();
        // asin(y) is 90 straight up and -90 straight down; rebase so that
        // straight up reads 0 and the angle falls to -180 as the hand drops
        let vertical = dir.y.clamp(-1.0, 1.0).asin().to_degrees() - 90.0;

        let local = shoulder.rotation.inverse().then(&hand.rotation).euler_deg();
        let rotation = EulerAngles::new(
            wrap_rotation(local.x),
            wrap_rotation(local.y),
            wrap_rotation(local.z),
        );

        Self {
            horizontal,
            vertical,
            rotation,
        }
    }
}

/// Normalize, mapping near-zero vectors to zero rather than NaN (the hand
/// sitting exactly on the shoulder reads as horizontal 0, vertical -90)
fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm < 1e-9 {
        Vector3::zeros()
    } else {
        v / norm
    }
}
