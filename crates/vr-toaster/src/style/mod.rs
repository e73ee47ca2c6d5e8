//! Visual presets applied to new toasts

mod color;

pub use color::Color;

use serde::Deserialize;
use tracing::warn;

/// Where the label text sits inside its card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAnchor {
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// A named visual preset: label font and color, card background
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Style {
    pub name: String,
    /// Font asset name; `None` keeps the host's default font
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default = "Color::white")]
    pub text_color: Color,
    #[serde(default)]
    pub anchor: TextAnchor,
    /// Sliced background sprite asset name
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default = "Color::translucent_black")]
    pub background_color: Color,
}

impl Style {
    /// The built-in preset: white centered text on a half transparent black card
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            font: None,
            text_color: Color::WHITE,
            anchor: TextAnchor::MiddleCenter,
            background: None,
            background_color: Color::TRANSLUCENT_BLACK,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::named(StyleTable::DEFAULT_NAME)
    }
}

/// Ordered style presets, looked up by name.
///
/// Never empty: an empty list is replaced by a single default style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: Vec<Style>,
}

impl StyleTable {
    pub const DEFAULT_NAME: &'static str = "default";

    pub fn new(styles: Vec<Style>) -> Self {
        if styles.is_empty() {
            warn!(
                "the styles table needs to contain at least one element, using the default style"
            );
            return Self {
                styles: vec![Style::default()],
            };
        }

        for (i, style) in styles.iter().enumerate() {
            if styles[..i].iter().any(|s| s.name == style.name) {
                warn!(
                    style = %style.name,
                    "duplicate style name, the first definition wins",
                );
            }
        }

        Self { styles }
    }

    /// First style carrying `name`
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new(vec![Style::default()])
    }
}
