//! 3D vector representation for directions and offsets

use std::ops::{Add, Mul, Neg, Sub};

use super::{Quaternion, EPSILON};

/// A vector in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector pointing up (+Y)
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector pointing forward (+Z)
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new 3D vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Length of the vector
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length (avoids the sqrt)
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit-length copy; the zero vector stays zero
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > EPSILON {
            *self * (1.0 / mag)
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: &Vector3D) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3D) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Linear interpolation, `t` unclamped
    pub fn lerp(&self, other: &Vector3D, t: f32) -> Self {
        *self + (*other - *self) * t
    }

    /// Angle between two vectors in radians
    pub fn angle(&self, other: &Vector3D) -> f32 {
        let mags = self.magnitude() * other.magnitude();
        if mags > EPSILON {
            (self.dot(other) / mags).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        }
    }

    /// Some unit vector perpendicular to this one
    pub fn any_perpendicular(&self) -> Self {
        let n = self.normalize();
        let helper = if n.x.abs() < 0.9 { Self::RIGHT } else { Self::UP };
        n.cross(&helper).normalize()
    }

    /// Spherical interpolation.
    ///
    /// The direction is rotated along the great circle between the two
    /// vectors while the magnitude is interpolated linearly. `t` is clamped
    /// to `[0, 1]`.
    pub fn slerp(&self, other: &Vector3D, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let from_mag = self.magnitude();
        let to_mag = other.magnitude();

        if from_mag <= EPSILON || to_mag <= EPSILON {
            return self.lerp(other, t);
        }

        let from = *self * (1.0 / from_mag);
        let to = *other * (1.0 / to_mag);
        let direction = rotate_unit_towards(from, to, from.angle(&to) * t);

        direction * (from_mag + (to_mag - from_mag) * t)
    }

    /// Rotate `self` toward `target` by at most `max_radians`, while moving
    /// its magnitude toward the target's by at most `max_magnitude_delta`.
    ///
    /// An infinite magnitude delta adopts the target magnitude outright.
    pub fn rotate_towards(
        &self,
        target: &Vector3D,
        max_radians: f32,
        max_magnitude_delta: f32,
    ) -> Self {
        let from_mag = self.magnitude();
        let to_mag = target.magnitude();

        if from_mag <= EPSILON || to_mag <= EPSILON {
            return self.move_towards(target, max_magnitude_delta);
        }

        let from = *self * (1.0 / from_mag);
        let to = *target * (1.0 / to_mag);
        let direction = rotate_unit_towards(from, to, max_radians.max(0.0));

        direction * move_scalar_towards(from_mag, to_mag, max_magnitude_delta)
    }

    /// Move toward `target` by at most `max_distance`
    pub fn move_towards(&self, target: &Vector3D, max_distance: f32) -> Self {
        let diff = *target - *self;
        let distance = diff.magnitude();
        if distance <= max_distance || distance <= EPSILON {
            *target
        } else {
            *self + diff * (max_distance / distance)
        }
    }
}

/// Rotate unit vector `from` toward unit vector `to` by at most `radians`.
fn rotate_unit_towards(from: Vector3D, to: Vector3D, radians: f32) -> Vector3D {
    let angle = from.angle(&to);
    if angle <= EPSILON || radians >= angle {
        return to;
    }

    let mut axis = from.cross(&to);
    if axis.magnitude_squared() <= EPSILON {
        // Anti-parallel: every great circle works
        axis = from.any_perpendicular();
    }

    Quaternion::from_axis_angle(axis, radians)
        .rotate_vector(from)
        .normalize()
}

fn move_scalar_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}
