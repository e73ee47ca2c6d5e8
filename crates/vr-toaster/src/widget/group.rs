//! Group roots: one world-space canvas per anchor target

use std::collections::HashMap;

use crate::config::PanelMetrics;
use crate::spatial::{Transform, Vector3D};

use super::{Panel, PanelId};

/// Anchor target for a stack of toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastGroup {
    LeftHand,
    RightHand,
    Frontal,
}

impl ToastGroup {
    pub const ALL: [ToastGroup; 3] = [
        ToastGroup::LeftHand,
        ToastGroup::RightHand,
        ToastGroup::Frontal,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            ToastGroup::LeftHand => 0,
            ToastGroup::RightHand => 1,
            ToastGroup::Frontal => 2,
        }
    }

    pub fn is_frontal(self) -> bool {
        self == ToastGroup::Frontal
    }

    /// Name of the root object, as shown in host scene listings
    pub fn root_name(self) -> &'static str {
        match self {
            ToastGroup::LeftHand => "VRToaster_LeftText",
            ToastGroup::RightHand => "VRToaster_RightText",
            ToastGroup::Frontal => "VRToaster_FrontText",
        }
    }
}

/// Where a new toast is inserted in its group's stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    Top,
    #[default]
    Bottom,
}

/// Root of one group: its world pose and the ordered panels under it
#[derive(Debug, Clone)]
pub struct GroupRoot {
    group: ToastGroup,
    /// World pose of the canvas; scale is `1 / density`
    pub(crate) transform: Transform,
    pub(crate) metrics: PanelMetrics,
    pub(crate) children: Vec<PanelId>,
    pub(crate) visible_count: u32,
    content_height: f32,
}

impl GroupRoot {
    pub(crate) fn new(group: ToastGroup, metrics: PanelMetrics) -> Self {
        let mut transform = Transform::identity();
        transform.scale = Vector3D::ONE * (1.0 / metrics.density as f32);

        Self {
            group,
            transform,
            metrics,
            children: Vec::new(),
            visible_count: 0,
            content_height: 0.0,
        }
    }

    pub fn group(&self) -> ToastGroup {
        self.group
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }

    /// Panels in stacking order, first child on top
    pub fn children(&self) -> &[PanelId] {
        &self.children
    }

    /// Number of panels that finished growing in and have not collapsed since
    pub fn visible_count(&self) -> u32 {
        self.visible_count
    }

    /// Stacked height of all children in canvas pixels
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Content height converted to world units
    pub fn world_height(&self) -> f32 {
        self.content_height * self.transform.scale.y
    }

    pub(crate) fn insert(&mut self, id: PanelId, position: ToastPosition) {
        match position {
            ToastPosition::Top => self.children.insert(0, id),
            ToastPosition::Bottom => self.children.push(id),
        }
    }

    /// Insert `id` directly after `sibling`, or at the end if `sibling` is gone
    pub(crate) fn insert_after(&mut self, sibling: PanelId, id: PanelId) {
        match self.children.iter().position(|c| *c == sibling) {
            Some(index) => self.children.insert(index + 1, id),
            None => self.children.push(id),
        }
    }

    pub(crate) fn remove(&mut self, id: PanelId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| *c != id);
        self.children.len() != before
    }

    /// Stack the children top to bottom and fit the root to their height
    pub(crate) fn rebuild_layout(&mut self, panels: &mut HashMap<PanelId, Panel>) {
        let mut cursor = 0.0;
        for id in &self.children {
            if let Some(panel) = panels.get_mut(id) {
                panel.top = cursor;
                panel.height = panel.preferred_height(self.metrics.width_px);
                cursor += panel.height;
            }
        }
        self.content_height = cursor;
    }
}
