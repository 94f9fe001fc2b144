//! Joint transforms and the rotation helpers the evaluators share.
//!
//! The engine is Z-up. Turning is measured about the vertical axis with
//! clockwise rotations counted as positive.

use glam::{Quat, Vec2, Vec3};

/// Position and rotation of a single joint at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl JointTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    #[must_use]
    pub const fn from_rotation(rotation: Quat) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation,
        }
    }
}

impl Default for JointTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation angle about the vertical (Z) axis, from the Euler decomposition
/// of `q`. Range is `(-PI, PI]`.
#[must_use]
pub fn euler_z(q: Quat) -> f32 {
    let sin_yaw = 2.0 * (q.x * q.y + q.z * q.w);
    let cos_yaw = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
    sin_yaw.atan2(cos_yaw)
}

/// Signed turn between two consecutive rotations, clockwise positive.
#[must_use]
pub fn turn_delta(previous: Quat, current: Quat) -> f32 {
    let delta = current * previous.conjugate();
    -euler_z(delta)
}

/// Length of the XY (ground plane) part of `v`.
#[inline]
#[must_use]
pub fn horizontal_length(v: Vec3) -> f32 {
    Vec2::new(v.x, v.y).length()
}
