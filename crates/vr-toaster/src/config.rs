//! Toaster configuration
//!
//! Read once at startup (usually from TOML) and treated as read-only while
//! the toaster runs. Ranged values are clamped on validation; values that
//! would make the panels degenerate are rejected.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, ToasterError};
use crate::style::Style;
use crate::widget::ToastGroup;

/// Settings shared by the left and right hand groups
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HandSettings {
    /// Toast width in world units
    pub width: f32,
    /// Canvas pixels per world unit
    pub density: u32,
    pub font_size: u32,
    /// Horizontal angle in degrees between the hand and the toast, mirrored
    /// for the left hand
    pub angle: f32,
    /// Maximum deviation in degrees from the head's forward direction
    pub max_head_angle: f32,
    pub min_head_distance: f32,
}

impl Default for HandSettings {
    fn default() -> Self {
        Self {
            width: 0.25,
            density: 1000,
            font_size: 16,
            angle: 30.0,
            max_head_angle: 45.0,
            min_head_distance: 1.0,
        }
    }
}

/// Horizontal and vertical components of the head-to-toast offset
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FrontalOffset {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Settings for the head-following frontal group
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontalSettings {
    pub width: f32,
    pub density: u32,
    pub font_size: u32,
    pub position: FrontalOffset,
    /// Fraction of the remaining arc covered each frame
    pub smoothing: f32,
}

impl Default for FrontalSettings {
    fn default() -> Self {
        Self {
            width: 0.5,
            density: 500,
            font_size: 16,
            position: FrontalOffset {
                horizontal: 1.5,
                vertical: 0.1,
            },
            smoothing: 0.05,
        }
    }
}

/// Complete toaster configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToasterConfig {
    /// Card padding as a fraction of the toast width
    pub padding: f32,
    /// Spacing between stacked toasts in world units
    pub spacing: f32,
    pub hand: HandSettings,
    pub frontal: FrontalSettings,
    pub styles: Vec<Style>,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            padding: 0.05,
            spacing: 0.03,
            hand: HandSettings::default(),
            frontal: FrontalSettings::default(),
            styles: vec![Style::default()],
        }
    }
}

/// Pixel metrics of the panels in one group, derived from the configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMetrics {
    /// Canvas width in pixels
    pub width_px: f32,
    pub density: u32,
    pub font_size: u32,
    /// Card padding on every side, in pixels
    pub padding_px: u32,
    /// Gap below each toast, in pixels
    pub spacing_px: u32,
}

impl ToasterConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: ToasterConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading toaster configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Clamp ranged values and reject degenerate ones
    pub fn validate(&mut self) -> Result<()> {
        check_positive("hand.width", self.hand.width)?;
        check_positive("frontal.width", self.frontal.width)?;
        if self.hand.density == 0 {
            return Err(ToasterError::Config("hand.density must be greater than zero".into()));
        }
        if self.frontal.density == 0 {
            return Err(ToasterError::Config("frontal.density must be greater than zero".into()));
        }
        check_positive(
            "frontal.position.horizontal",
            self.frontal.position.horizontal,
        )?;

        self.padding = clamp_logged("padding", self.padding, 0.0, 0.5);
        self.spacing = clamp_logged("spacing", self.spacing, 0.0, f32::MAX);
        self.hand.max_head_angle =
            clamp_logged("hand.max_head_angle", self.hand.max_head_angle, 0.0, 55.0);
        self.hand.min_head_distance =
            clamp_logged(
                "hand.min_head_distance",
                self.hand.min_head_distance,
                0.0,
                f32::MAX,
            );
        self.frontal.smoothing =
            clamp_logged("frontal.smoothing", self.frontal.smoothing, 0.0, 1.0);

        Ok(())
    }

    /// Pixel metrics for panels created in `group`
    pub fn metrics(&self, group: ToastGroup) -> PanelMetrics {
        let (width, density, font_size) = if group.is_frontal() {
            (self.frontal.width, self.frontal.density, self.frontal.font_size)
        } else {
            (self.hand.width, self.hand.density, self.hand.font_size)
        };
        let width_px = width * density as f32;

        PanelMetrics {
            width_px,
            density,
            font_size,
            padding_px: (width_px * self.padding).round_ties_even() as u32,
            spacing_px: (self.spacing * density as f32).round_ties_even() as u32,
        }
    }
}

fn check_positive(key: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ToasterError::Config(format!(
            "{key} must be a positive number, got {value}"
        )))
    }
}

fn clamp_logged(key: &str, value: f32, min: f32, max: f32) -> f32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} = {} is out of range, using {}", key, value, clamped);
    }
    clamped
}
