//! Simulated headset and controller tracking
//!
//! The head sweeps left and right while both hands drift in front of the
//! body, enough to exercise the pose clamps and the frontal smoothing.

use std::time::Duration;

use vr_toaster::{Point3D, Quaternion, TrackingFrame, Transform, Vector3D};

/// Head height above the play area floor
const HEAD_HEIGHT: f32 = 1.65;

pub struct TrackingSimulator {
    elapsed: f32,
    /// Peak head yaw in radians
    yaw_amplitude: f32,
    /// Head sweep speed in radians per second
    yaw_speed: f32,
}

impl Default for TrackingSimulator {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            yaw_amplitude: 0.9,
            yaw_speed: 0.8,
        }
    }
}

impl TrackingSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulated time and return the new tracking frame
    pub fn advance(&mut self, dt: Duration) -> TrackingFrame {
        self.elapsed += dt.as_secs_f32();
        self.frame()
    }

    pub fn frame(&self) -> TrackingFrame {
        let t = self.elapsed;
        let yaw = (t * self.yaw_speed).sin() * self.yaw_amplitude;
        let pitch = (t * 0.3).sin() * 0.15;

        let rotation = Quaternion::from_axis_angle(Vector3D::UP, yaw)
            * Quaternion::from_axis_angle(Vector3D::RIGHT, pitch);
        let head = Transform::from_position_rotation(Point3D::new(0.0, HEAD_HEIGHT, 0.0), rotation);

        let bob = (t * 2.1).sin() * 0.05;
        let reach = 0.3 + (t * 0.7).cos() * 0.1;
        let left_hand = Point3D::new(-0.25 - bob, HEAD_HEIGHT - 0.45 + bob, reach);
        let right_hand = Point3D::new(0.25 + bob, HEAD_HEIGHT - 0.4 - bob, reach + 0.05);

        TrackingFrame {
            play_area: Transform::identity(),
            head,
            left_hand,
            right_hand,
        }
    }
}
