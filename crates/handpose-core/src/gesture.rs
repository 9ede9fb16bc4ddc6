//! Two-handed static gesture predicates.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rule::HandPoseRule;
use crate::skeleton::SkeletonFrame;
use crate::types::Side;

/// A static gesture: one pose rule per hand.
///
/// The gesture is fulfilled when both hands fulfill their rules
/// simultaneously. Head rotation is deliberately not part of the predicate;
/// the same gesture may be performed while expressing different states
/// with the head.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GesturePredicate {
    pub left: HandPoseRule,
    pub right: HandPoseRule,
}

impl GesturePredicate {
    pub fn new(left: HandPoseRule, right: HandPoseRule) -> Self {
        Self { left, right }
    }

    /// The predicate with hands swapped and each rule mirrored across the
    /// body's sagittal plane.
    ///
    /// Evaluating the result unmirrored is equivalent to evaluating the
    /// original with `mirrored = true`.
    pub fn mirrored(&self) -> Self {
        Self {
            left: self.right.mirrored(),
            right: self.left.mirrored(),
        }
    }

    /// Whether the frame fulfills this gesture.
    ///
    /// With `mirrored` set, the right rule is mirrored and tested against
    /// the left hand and vice versa, recognizing the reflected performance
    /// of the gesture.
    pub fn is_fulfilled(&self, frame: &SkeletonFrame, mirrored: bool) -> bool {
        let checked = if mirrored { self.mirrored() } else { *self };

        let left_fulfilled = checked
            .left
            .is_fulfilled(frame.hand(Side::Left), frame.shoulder(Side::Left));
        let right_fulfilled = checked
            .right
            .is_fulfilled(frame.hand(Side::Right), frame.shoulder(Side::Right));

        left_fulfilled && right_fulfilled
    }

    /// Parse an offline-authored gesture definition
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::DirectionalTest;
    use crate::types::{JointPose, Orientation3D, Position3D};

    fn joint(x: f64, y: f64, z: f64) -> JointPose {
        JointPose::new(Position3D::new(x, y, z), Orientation3D::identity())
    }

    /// Shoulders at +-0.2 on x, head above, hands placed by the caller
    fn frame(left_hand: JointPose, right_hand: JointPose) -> SkeletonFrame {
        SkeletonFrame {
            head: joint(0.0, 1.7, 0.0),
            left_shoulder: joint(-0.2, 1.5, 0.0),
            right_shoulder: joint(0.2, 1.5, 0.0),
            left_hand,
            right_hand,
        }
    }

    /// Left hand raised, right hand out to the right side
    fn asymmetric_gesture() -> GesturePredicate {
        GesturePredicate {
            left: HandPoseRule {
                vertical: DirectionalTest::inside(-10.0, 10.0),
                horizontal: DirectionalTest::inside(-180.0, 180.0),
                ..HandPoseRule::permissive()
            },
            right: HandPoseRule {
                vertical: DirectionalTest::inside(-100.0, -80.0),
                horizontal: DirectionalTest::inside(80.0, 100.0),
                ..HandPoseRule::permissive()
            },
        }
    }

    fn performing_frame() -> SkeletonFrame {
        frame(joint(-0.2, 2.0, 0.0), joint(0.7, 1.5, 0.0))
    }

    fn reflected_frame() -> SkeletonFrame {
        frame(joint(-0.7, 1.5, 0.0), joint(0.2, 2.0, 0.0))
    }

    #[test]
    fn test_fulfilled_requires_both_hands() {
        let gesture = asymmetric_gesture();
        assert!(gesture.is_fulfilled(&performing_frame(), false));

        // Right hand dropped in front instead of to the side
        let partial = frame(joint(-0.2, 2.0, 0.0), joint(0.2, 1.5, 0.5));
        assert!(!gesture.is_fulfilled(&partial, false));
    }

    #[test]
    fn test_mirrored_check_recognizes_reflection() {
        let gesture = asymmetric_gesture();
        assert!(!gesture.is_fulfilled(&reflected_frame(), false));
        assert!(gesture.is_fulfilled(&reflected_frame(), true));
        assert!(!gesture.is_fulfilled(&performing_frame(), true));
    }

    #[test]
    fn test_mirrored_equals_swapped_and_mirrored_rules() {
        let gesture = asymmetric_gesture();
        let swapped = GesturePredicate {
            left: gesture.right.mirrored(),
            right: gesture.left.mirrored(),
        };
        for f in [performing_frame(), reflected_frame()] {
            assert_eq!(
                gesture.is_fulfilled(&f, true),
                swapped.is_fulfilled(&f, false)
            );
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let gesture = asymmetric_gesture();
        let json = gesture.to_json().unwrap();
        let parsed = GesturePredicate::from_json(&json).unwrap();
        assert_eq!(parsed, gesture);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(GesturePredicate::from_json("not a gesture").is_err());
    }
}
