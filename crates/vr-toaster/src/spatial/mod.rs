//! Spatial primitives for positioning toast panels
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: Forward (+) / Backward (-)

mod point3d;
mod quaternion;
mod transform;
mod vector3d;

pub use point3d::Point3D;
pub use quaternion::Quaternion;
pub use transform::Transform;
pub use vector3d::Vector3D;

/// Lengths and angles below this are treated as zero
pub(crate) const EPSILON: f32 = 1e-6;
