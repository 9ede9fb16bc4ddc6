//! Body-anchored follow points.
//!
//! A follow anchor tracks the skeleton using the body direction for its
//! bearing and the head for its base position. Gesture recognition uses
//! anchors to estimate shoulder placement from the headset alone; from the
//! derived shoulders the hand directions can be measured.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use handpose_core::{EulerAngles, Orientation3D, Position3D, SkeletonFrame};

/// A point that follows the skeleton at a fixed offset, distance, and
/// bearing relative to the body direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowAnchor {
    /// Offset from the head position
    pub offset: Vector3<f64>,
    /// Distance to follow at along the rotated body direction
    pub distance: f64,
    /// Euler rotation applied to the body direction before following
    pub angle: EulerAngles,
}

impl FollowAnchor {
    pub fn new(offset: Vector3<f64>, distance: f64, angle: EulerAngles) -> Self {
        Self {
            offset,
            distance,
            angle,
        }
    }

    /// World-space position of the anchor for the given frame
    pub fn follow_position(&self, frame: &SkeletonFrame) -> Position3D {
        let base = frame.head.position.to_vector() + self.offset;

        let rotation = Orientation3D::from_euler_deg(self.angle.x, self.angle.y, self.angle.z);
        let to_destination = rotation.rotate(frame.body_direction());

        Position3D::from_nalgebra((base + to_destination * self.distance).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handpose_core::JointPose;

    fn frame() -> SkeletonFrame {
        SkeletonFrame {
            head: JointPose::new(Position3D::new(0.0, 1.7, 0.0), Orientation3D::identity()),
            left_shoulder: JointPose::identity(),
            right_shoulder: JointPose::identity(),
            left_hand: JointPose::identity(),
            right_hand: JointPose::identity(),
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_follows_along_body_direction() {
        let anchor = FollowAnchor::new(Vector3::zeros(), 0.5, EulerAngles::zero());
        let pos = anchor.follow_position(&frame());
        assert_close(pos.x, 0.0);
        assert_close(pos.y, 1.7);
        assert_close(pos.z, 0.5);
    }

    #[test]
    fn test_offset_applies_before_bearing() {
        let anchor = FollowAnchor::new(
            Vector3::new(0.0, -0.25, 0.0),
            0.5,
            EulerAngles::zero(),
        );
        let pos = anchor.follow_position(&frame());
        assert_close(pos.y, 1.45);
        assert_close(pos.z, 0.5);
    }

    #[test]
    fn test_bearing_rotates_around_body() {
        // 90 degrees yaw swings the follow point to the body's side
        let anchor = FollowAnchor::new(Vector3::zeros(), 0.5, EulerAngles::new(0.0, 90.0, 0.0));
        let pos = anchor.follow_position(&frame());
        assert_close(pos.x, 0.5);
        assert_close(pos.z, 0.0);
    }

    #[test]
    fn test_shoulder_pair_estimate() {
        // Two anchors with opposite yaw offsets derive a shoulder pair
        // below and to either side of the headset
        let offset = Vector3::new(0.0, -0.3, 0.0);
        let left = FollowAnchor::new(offset, 0.18, EulerAngles::new(0.0, -90.0, 0.0));
        let right = FollowAnchor::new(offset, 0.18, EulerAngles::new(0.0, 90.0, 0.0));

        let lp = left.follow_position(&frame());
        let rp = right.follow_position(&frame());
        assert_close(lp.x, -0.18);
        assert_close(rp.x, 0.18);
        assert_close(lp.y, 1.4);
        assert_close(rp.y, 1.4);
    }
}
