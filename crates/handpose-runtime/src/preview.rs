//! Preview posing: place a skeleton's hands where a gesture expects them.
//!
//! Authoring tools use this to visualize a gesture definition without live
//! tracking data: pick a point of each rule's bounds (minimum, midpoint, or
//! maximum) and pose the hands there.

use nalgebra::Vector3;

use handpose_core::{
    DirectionalTest, EulerAngles, GesturePredicate, HandPoseRule, JointPose, Orientation3D,
    Position3D, RecognitionMode, SkeletonFrame,
};

/// How far out from the shoulder a previewed hand is placed, in
/// skeleton-local units
const HAND_PREVIEW_DISTANCE: f64 = 0.3;

/// Which point of each bounded range the preview pose uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    Minimum,
    Average,
    Maximum,
}

/// The representative angle of one test under the given preview mode.
///
/// Average previews of an Outside test add 180 degrees: the midpoint of the
/// excluded arc rotated to the opposite side of the unit circle, which is
/// inside the accepted region.
fn preview_angle(mode: PreviewMode, test: &DirectionalTest) -> f64 {
    match mode {
        PreviewMode::Average => {
            let offset = match test.mode {
                RecognitionMode::Inside => 0.0,
                RecognitionMode::Outside => 180.0,
            };
            test.range.midpoint() + offset
        }
        PreviewMode::Maximum => test.range.max,
        PreviewMode::Minimum => test.range.min,
    }
}

/// Where the hand should sit in world space to preview `rule` relative to
/// `shoulder`, componentwise scaled by the skeleton's scale.
pub fn hand_preview_position(
    mode: PreviewMode,
    rule: &HandPoseRule,
    shoulder: &JointPose,
    skeleton_scale: Vector3<f64>,
) -> Position3D {
    let horizontal = preview_angle(mode, &rule.horizontal);
    let vertical = preview_angle(mode, &rule.vertical);

    // Vertical bounds measure elevation from straight up (0 above the
    // shoulder, -90 in front); the preview pitch is taken from the shoulder
    // forward, hence the 90 degree rebase
    let direction = Orientation3D::from_euler_deg(-(vertical + 90.0), horizontal, 0.0)
        .rotate(shoulder.rotation.forward())
        .component_mul(&skeleton_scale);

    Position3D::from_nalgebra(
        shoulder.position.to_nalgebra() + direction * HAND_PREVIEW_DISTANCE,
    )
}

/// The rotation the hand should be previewed with, as Euler angles.
pub fn hand_preview_rotation(mode: PreviewMode, rule: &HandPoseRule) -> EulerAngles {
    EulerAngles::new(
        preview_angle(mode, &rule.rot_x),
        preview_angle(mode, &rule.rot_y),
        preview_angle(mode, &rule.rot_z),
    )
}

/// Pose the skeleton's hands to mimic the gesture.
///
/// `scale` is the skeleton's overall scale (unit for a life-size rig). Hand
/// positions are always updated; rotations only when the per-hand flag is
/// set, so a tool can preview direction bounds while leaving a
/// hand-adjusted rotation alone.
pub fn pose_skeleton(
    frame: &mut SkeletonFrame,
    gesture: &GesturePredicate,
    mode: PreviewMode,
    scale: Vector3<f64>,
    update_left_angle: bool,
    update_right_angle: bool,
) {
    frame.left_hand.position =
        hand_preview_position(mode, &gesture.left, &frame.left_shoulder, scale);
    if update_left_angle {
        let e = hand_preview_rotation(mode, &gesture.left);
        frame.left_hand.rotation = Orientation3D::from_euler_deg(e.x, e.y, e.z);
    }

    frame.right_hand.position =
        hand_preview_position(mode, &gesture.right, &frame.right_shoulder, scale);
    if update_right_angle {
        let e = hand_preview_rotation(mode, &gesture.right);
        frame.right_hand.rotation = Orientation3D::from_euler_deg(e.x, e.y, e.z);
    }
}
