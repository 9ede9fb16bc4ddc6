//! Fundamental value types: positions, orientations, joint poses.
//!
//! Coordinate convention: y-up, z-forward, matching the tracking runtimes
//! this core consumes data from. Euler decomposition order is yaw (Y),
//! then pitch (X), then roll (Z): `R = Ry * Rx * Rz`.

use nalgebra::{Matrix3, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// 3D position in world space (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Euler angles in degrees (pitch x, yaw y, roll z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Orientation in 3D space using quaternion representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation3D {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation3D {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        let norm = (w * w + x * x + y * y + z * z).sqrt();
        Self {
            w: w / norm,
            x: x / norm,
            y: y / norm,
            z: z / norm,
        }
    }

    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Create from Euler angles in degrees, applied yaw-pitch-roll
    /// (`R = Ry * Rx * Rz`)
    pub fn from_euler_deg(x_deg: f64, y_deg: f64, z_deg: f64) -> Self {
        let qx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let qy = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let qz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());
        Self::from_unit_quaternion(qy * qx * qz)
    }

    pub fn from_unit_quaternion(q: UnitQuaternion<f64>) -> Self {
        Self {
            w: q.w,
            x: q.i,
            y: q.j,
            z: q.k,
        }
    }

    pub fn to_unit_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::new_normalize(nalgebra::Quaternion::new(self.w, self.x, self.y, self.z))
    }

    pub fn to_rotation_matrix(&self) -> Matrix3<f64> {
        *self.to_unit_quaternion().to_rotation_matrix().matrix()
    }

    /// Rotate a vector by this orientation
    pub fn rotate(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.to_unit_quaternion() * v
    }

    pub fn inverse(&self) -> Self {
        Self::from_unit_quaternion(self.to_unit_quaternion().inverse())
    }

    /// Compose with another orientation (`self` applied after `other`)
    pub fn then(&self, other: &Orientation3D) -> Self {
        Self::from_unit_quaternion(self.to_unit_quaternion() * other.to_unit_quaternion())
    }

    /// Get the forward direction vector (+Z rotated)
    pub fn forward(&self) -> Vector3<f64> {
        self.rotate(Vector3::z())
    }

    /// Get the up direction vector (+Y rotated)
    pub fn up(&self) -> Vector3<f64> {
        self.rotate(Vector3::y())
    }

    /// Decompose into Euler angles in degrees (`R = Ry * Rx * Rz`).
    ///
    /// At the gimbal-locked poles (pitch = ±90°) roll is pinned to zero and
    /// the remaining rotation is reported as yaw.
    pub fn euler_deg(&self) -> EulerAngles {
        let m = self.to_rotation_matrix();
        let sin_x = (-m[(1, 2)]).clamp(-1.0, 1.0);
        let x = sin_x.asin();

        let (y, z) = if sin_x.abs() < 1.0 - 1e-9 {
            (
                m[(0, 2)].atan2(m[(2, 2)]),
                m[(1, 0)].atan2(m[(1, 1)]),
            )
        } else {
            ((-m[(2, 0)]).atan2(m[(0, 0)]), 0.0)
        };

        EulerAngles::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

impl Default for Orientation3D {
    fn default() -> Self {
        Self::identity()
    }
}

/// A single tracked joint: world-space position and orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointPose {
    pub position: Position3D,
    pub rotation: Orientation3D,
}

impl JointPose {
    pub fn new(position: Position3D, rotation: Orientation3D) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self::new(Position3D::origin(), Orientation3D::identity())
    }
}

/// Body side selector for hands and shoulders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}
