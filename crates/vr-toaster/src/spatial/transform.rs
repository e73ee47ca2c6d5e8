//! Transform representing position, rotation, and scale in 3D space

use super::{Point3D, Quaternion, Vector3D};

/// A complete 3D transform (position + rotation + scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point3D,
    pub rotation: Quaternion,
    pub scale: Vector3D,
}

impl Transform {
    /// Identity transform (origin, no rotation, unit scale)
    pub fn identity() -> Self {
        Self::from_position_rotation(Point3D::ORIGIN, Quaternion::IDENTITY)
    }

    pub fn from_position(position: Point3D) -> Self {
        Self::from_position_rotation(position, Quaternion::IDENTITY)
    }

    pub fn from_position_rotation(position: Point3D, rotation: Quaternion) -> Self {
        Self {
            position,
            rotation,
            scale: Vector3D::ONE,
        }
    }

    pub fn forward(&self) -> Vector3D {
        self.rotation.forward()
    }

    pub fn up(&self) -> Vector3D {
        self.rotation.up()
    }

    /// Replace position and rotation, leaving scale untouched
    pub fn set_position_and_rotation(&mut self, position: Point3D, rotation: Quaternion) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Transform a direction from local to world space (rotation only)
    pub fn transform_direction(&self, direction: Vector3D) -> Vector3D {
        self.rotation.rotate_vector(direction)
    }

    /// Transform a direction from world to local space (rotation only)
    pub fn inverse_transform_direction(&self, direction: Vector3D) -> Vector3D {
        self.rotation.inverse().rotate_vector(direction)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
