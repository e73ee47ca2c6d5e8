//! Grow/fade tween between hidden (0) and shown (1)

use std::time::Duration;

/// Time a full 0 to 1 transition takes
pub const ANIMATION_TIME: Duration = Duration::from_millis(200);

/// Tween of a panel's scale and opacity toward a target value.
///
/// Each step advances the elapsed fraction by `dt / ANIMATION_TIME` and
/// yields `lerp(start, target, elapsed)`. Stepping stops once the elapsed
/// fraction exceeds `|target - start|`, so a tween resumed from a partial
/// value stops short of its target; callers rely on that timing.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastTween {
    start: f32,
    target: f32,
    delta: f32,
    elapsed: f32,
}

impl ToastTween {
    pub fn new(start: f32, target: f32) -> Self {
        Self {
            start,
            target,
            delta: (target - start).abs(),
            elapsed: 0.0,
        }
    }

    /// Advance one frame and return the value to apply, or `None` once the
    /// tween has run its course
    pub fn step(&mut self, dt: Duration) -> Option<f32> {
        if self.is_finished() {
            return None;
        }

        self.elapsed += dt.as_secs_f32() / ANIMATION_TIME.as_secs_f32();
        let t = self.elapsed.clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed > self.delta
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Elapsed fraction of a full transition
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether finishing this tween is a real hidden/shown transition
    pub fn changes_state(&self) -> bool {
        self.start != self.target
    }
}
