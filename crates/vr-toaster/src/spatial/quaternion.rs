//! Quaternion representation for 3D rotations

use std::ops::Mul;

use super::{Vector3D, EPSILON};

/// A unit quaternion describing an orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_radians` around `axis` (right-hand rule)
    pub fn from_axis_angle(axis: Vector3D, angle_radians: f32) -> Self {
        let axis = axis.normalize();
        let (sin_half, cos_half) = (angle_radians * 0.5).sin_cos();

        Self::new(
            axis.x * sin_half,
            axis.y * sin_half,
            axis.z * sin_half,
            cos_half,
        )
    }

    /// Rotation whose forward axis points along `forward` and whose up axis
    /// lies in the plane of `forward` and `up`.
    ///
    /// A zero `forward` yields the identity. When `forward` and `up` are
    /// parallel a substitute up axis is picked so the result stays defined.
    pub fn look_rotation(forward: Vector3D, up: Vector3D) -> Self {
        let f = forward.normalize();
        if f.magnitude_squared() <= EPSILON {
            return Self::IDENTITY;
        }

        let mut r = up.cross(&f);
        if r.magnitude_squared() <= EPSILON {
            let fallback = if f.z.abs() < 0.9 { Vector3D::FORWARD } else { Vector3D::RIGHT };
            r = fallback.cross(&f);
        }
        let r = r.normalize();
        let u = f.cross(&r);

        // Columns of the rotation matrix are the rotated basis vectors
        let (m00, m01, m02) = (r.x, u.x, f.x);
        let (m10, m11, m12) = (r.y, u.y, f.y);
        let (m20, m21, m22) = (r.z, u.z, f.z);

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };

        q.normalize()
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self::new(self.x / mag, self.y / mag, self.z / mag, self.w / mag)
        } else {
            Self::IDENTITY
        }
    }

    /// Inverse rotation
    pub fn inverse(&self) -> Self {
        let mag_sq = self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w;
        if mag_sq > 0.0 {
            let inv = 1.0 / mag_sq;
            Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotate a vector by this quaternion
    pub fn rotate_vector(&self, v: Vector3D) -> Vector3D {
        let q_vec = Vector3D::new(self.x, self.y, self.z);
        let uv = q_vec.cross(&v);
        let uuv = q_vec.cross(&uv);
        v + (uv * self.w + uuv) * 2.0
    }

    pub fn forward(&self) -> Vector3D {
        self.rotate_vector(Vector3D::FORWARD)
    }

    pub fn up(&self) -> Vector3D {
        self.rotate_vector(Vector3D::UP)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl Mul<Vector3D> for Quaternion {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Self::Output {
        self.rotate_vector(rhs)
    }
}
