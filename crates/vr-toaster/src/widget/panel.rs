//! A single toast panel: wrapper, card and label collapsed into one node

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::PanelMetrics;
use crate::style::{Color, Style};

use super::{measure_lines, ToastGroup};

/// Line height as a multiple of the font size
const LINE_SPACING: f32 = 1.15;

/// Identifies a panel. Unique for the life of the process, across toasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub(crate) u64);

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(0);

impl PanelId {
    pub(crate) fn next() -> Self {
        PanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Node state of one toast panel.
///
/// `scale_y` and `alpha` move in lockstep between 0 (collapsed, invisible)
/// and 1 (fully shown).
#[derive(Debug, Clone)]
pub struct Panel {
    id: PanelId,
    group: ToastGroup,
    text: String,
    style: Style,
    font_size: u32,
    padding_px: u32,
    spacing_px: u32,
    pub(crate) scale_y: f32,
    pub(crate) alpha: f32,
    pub(crate) top: f32,
    pub(crate) height: f32,
    /// Whether this panel currently contributes to its group's visible count
    pub(crate) counted_visible: bool,
}

impl Panel {
    pub(crate) fn new(
        id: PanelId,
        group: ToastGroup,
        text: &str,
        style: Style,
        metrics: &PanelMetrics,
    ) -> Self {
        Self {
            id,
            group,
            text: text.to_string(),
            style,
            font_size: metrics.font_size,
            padding_px: metrics.padding_px,
            spacing_px: metrics.spacing_px,
            scale_y: 0.0,
            alpha: 0.0,
            top: 0.0,
            height: 0.0,
            counted_visible: false,
        }
    }

    /// Copy of this panel's configuration under a new id, collapsed and
    /// invisible
    pub(crate) fn clone_as(&self, id: PanelId) -> Self {
        Self {
            id,
            scale_y: 0.0,
            alpha: 0.0,
            counted_visible: false,
            ..self.clone()
        }
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    /// Apply one animation value to scale and opacity together
    pub(crate) fn apply(&mut self, value: f32) {
        self.scale_y = value;
        self.alpha = value;
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn group(&self) -> ToastGroup {
        self.group
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn padding_px(&self) -> u32 {
        self.padding_px
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Offset of the panel's top edge below the group root, in canvas pixels
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Laid out height in canvas pixels, including the spacing below it
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Label color after the panel's fade
    pub fn text_color(&self) -> Color {
        self.style.text_color.faded(self.alpha)
    }

    /// Card background color after the panel's fade
    pub fn background_color(&self) -> Color {
        self.style.background_color.faded(self.alpha)
    }

    /// Height this panel asks of its group's layout at the current scale.
    ///
    /// The unscaled height is the wrapped label plus card padding on both
    /// sides plus the spacing gap; the layout sees it multiplied by `scale_y`.
    pub fn preferred_height(&self, width_px: f32) -> f32 {
        let padding = self.padding_px as f32;
        let text_width = (width_px - 2.0 * padding).max(1.0);
        let lines = measure_lines(&self.text, text_width, self.font_size as f32);
        let line_height = self.font_size as f32 * LINE_SPACING;

        let unscaled = lines as f32 * line_height + 2.0 * padding + self.spacing_px as f32;
        unscaled * self.scale_y
    }
}
