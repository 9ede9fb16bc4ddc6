//! The per-tick skeleton snapshot consumed by gesture evaluation.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::types::{JointPose, Side};

/// A snapshot of the tracked body frame: the head (HMD), an estimated
/// shoulder pair, and both hands (controllers), all in a common world space.
///
/// A tracking provider outside this crate refreshes the frame once per tick;
/// evaluation only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkeletonFrame {
    pub head: JointPose,
    pub left_shoulder: JointPose,
    pub right_shoulder: JointPose,
    pub left_hand: JointPose,
    pub right_hand: JointPose,
}

impl SkeletonFrame {
    pub fn hand(&self, side: Side) -> &JointPose {
        match side {
            Side::Left => &self.left_hand,
            Side::Right => &self.right_hand,
        }
    }

    pub fn shoulder(&self, side: Side) -> &JointPose {
        match side {
            Side::Left => &self.left_shoulder,
            Side::Right => &self.right_shoulder,
        }
    }

    /// Best-guess direction the body is facing: the head's forward vector
    /// projected onto the horizontal plane.
    ///
    /// When the head is pitched past vertical (its up vector points below
    /// the horizon) the projected forward flips sign relative to the
    /// intended facing, so it is negated back. Not normalized.
    pub fn body_direction(&self) -> Vector3<f64> {
        let forward = self.head.rotation.forward();
        let mut direction = Vector3::new(forward.x, 0.0, forward.z);
        if self.head.rotation.up().dot(&Vector3::y()) < 0.0 {
            direction = -direction;
        }
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation3D, Position3D};

    fn frame_with_head(rotation: Orientation3D) -> SkeletonFrame {
        SkeletonFrame {
            head: JointPose::new(Position3D::new(0.0, 1.7, 0.0), rotation),
            left_shoulder: JointPose::identity(),
            right_shoulder: JointPose::identity(),
            left_hand: JointPose::identity(),
            right_hand: JointPose::identity(),
        }
    }

    #[test]
    fn test_body_direction_level_head() {
        let frame = frame_with_head(Orientation3D::identity());
        let dir = frame.body_direction();
        assert!((dir.z - 1.0).abs() < 1e-9);
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn test_body_direction_ignores_mild_pitch() {
        // Looking 45 degrees down still faces +Z
        let frame = frame_with_head(Orientation3D::from_euler_deg(45.0, 0.0, 0.0));
        let dir = frame.body_direction();
        assert!(dir.z > 0.0);
    }

    #[test]
    fn test_body_direction_flips_past_vertical() {
        // Pitched 135 degrees: the head's up vector points below the
        // horizon and the raw projected forward points backwards
        let frame = frame_with_head(Orientation3D::from_euler_deg(135.0, 0.0, 0.0));
        let dir = frame.body_direction();
        assert!(dir.z > 0.0, "flipped projection must be negated back");
    }

    #[test]
    fn test_side_accessors() {
        let mut frame = frame_with_head(Orientation3D::identity());
        frame.left_hand.position = Position3D::new(-1.0, 0.0, 0.0);
        frame.right_hand.position = Position3D::new(1.0, 0.0, 0.0);
        assert_eq!(frame.hand(Side::Left).position.x, -1.0);
        assert_eq!(frame.hand(Side::Right).position.x, 1.0);
    }
}
