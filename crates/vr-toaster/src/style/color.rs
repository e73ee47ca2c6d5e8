//! RGBA color used for text and card backgrounds

use serde::Deserialize;

/// Linear RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSLUCENT_BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.5);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub(crate) fn white() -> Self {
        Self::WHITE
    }

    pub(crate) fn translucent_black() -> Self {
        Self::TRANSLUCENT_BLACK
    }

    /// Same color with alpha multiplied by `opacity` (canvas group fade)
    pub fn faded(&self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..*self
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded() {
        let c = Color::TRANSLUCENT_BLACK.faded(0.5);
        assert_eq!(c.a, 0.25);
        assert_eq!(Color::WHITE.faded(2.0).a, 1.0);
    }
}
