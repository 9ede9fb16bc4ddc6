//! Per-hand pose rules.

use serde::{Deserialize, Serialize};

use crate::bounds::DirectionalTest;
use crate::evaluate::HandAngles;
use crate::types::JointPose;

/// The required pose of a single hand.
///
/// A rule constrains the hand along five angular axes: the direction of the
/// shoulder-to-hand vector (vertical and horizontal) and the hand's
/// rotation relative to the shoulder (x, y, z). A raised hand wants the
/// direction upwards of the shoulder; a handshake wants it lower and in
/// front of the body.
///
/// Rules are authored offline and treated as immutable during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandPoseRule {
    /// Elevation of the shoulder-to-hand direction
    pub vertical: DirectionalTest,
    /// Left/right-front/back angle of the shoulder-to-hand direction
    pub horizontal: DirectionalTest,
    /// Hand pitch relative to the shoulder
    pub rot_x: DirectionalTest,
    /// Hand yaw relative to the shoulder
    pub rot_y: DirectionalTest,
    /// Hand roll relative to the shoulder
    pub rot_z: DirectionalTest,
}

impl HandPoseRule {
    /// A rule satisfied by any pose: every axis accepts the full wrapped
    /// angle range
    pub fn permissive() -> Self {
        let everything = DirectionalTest::inside(-180.0, 180.0);
        Self {
            vertical: everything,
            horizontal: everything,
            rot_x: everything,
            rot_y: everything,
            rot_z: everything,
        }
    }

    /// Whether the hand, given its connected shoulder, fulfills this rule.
    ///
    /// Fulfilled iff all five (range, mode) constraints hold over the
    /// derived [`HandAngles`].
    pub fn is_fulfilled(&self, hand: &JointPose, shoulder: &JointPose) -> bool {
        let angles = HandAngles::from_joints(hand, shoulder);

        self.horizontal.satisfies(angles.horizontal)
            && self.vertical.satisfies(angles.vertical)
            && self.rot_x.satisfies(angles.rotation.x)
            && self.rot_y.satisfies(angles.rotation.y)
            && self.rot_z.satisfies(angles.rotation.z)
    }

    /// The rule reflected across the body's sagittal (vertical-forward)
    /// plane, as a fresh value sharing nothing with the original.
    ///
    /// Elevation and pitch are symmetric under the reflection and copy
    /// through; the horizontal direction, yaw, and roll flip sign, so their
    /// ranges become [-max, -min]. Recognition modes carry over unchanged.
    pub fn mirrored(&self) -> Self {
        Self {
            vertical: self.vertical,
            horizontal: self.horizontal.negated(),
            rot_x: self.rot_x,
            rot_y: self.rot_y.negated(),
            rot_z: self.rot_z.negated(),
        }
    }
}
