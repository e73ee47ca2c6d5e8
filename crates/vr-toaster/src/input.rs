//! Per-frame input from the host: frame timing and tracked poses

use std::time::Duration;

use crate::spatial::{Point3D, Transform};

/// Time elapsed since the previous frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTime {
    /// Scaled game time; zero while the host is paused. Drives animations.
    pub delta: Duration,
    /// Unscaled wall-clock time. Drives timed holds and delayed destruction.
    pub real_delta: Duration,
}

impl FrameTime {
    /// A frame where game time and real time advance together
    pub fn uniform(delta: Duration) -> Self {
        Self {
            delta,
            real_delta: delta,
        }
    }

    /// A frame with game time stopped
    pub fn paused(real_delta: Duration) -> Self {
        Self {
            delta: Duration::ZERO,
            real_delta,
        }
    }
}

/// A tracked hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Direction multiplier for mirrored hand settings
    pub fn sign(self) -> f32 {
        match self {
            Hand::Left => -1.0,
            Hand::Right => 1.0,
        }
    }
}

/// Tracked poses for one frame, all in world space
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingFrame {
    /// Center of the play area; its up axis is the world's up for toasts
    pub play_area: Transform,
    pub head: Transform,
    pub left_hand: Point3D,
    pub right_hand: Point3D,
}

impl TrackingFrame {
    pub fn hand(&self, hand: Hand) -> Point3D {
        match hand {
            Hand::Left => self.left_hand,
            Hand::Right => self.right_hand,
        }
    }
}

impl Default for TrackingFrame {
    fn default() -> Self {
        Self {
            play_area: Transform::identity(),
            head: Transform::identity(),
            left_hand: Point3D::new(-0.25, -0.4, 0.35),
            right_hand: Point3D::new(0.25, -0.4, 0.35),
        }
    }
}
