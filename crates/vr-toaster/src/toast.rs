//! Handle to a single toast panel.
//!
//! Every operation is a no-op once the panel is gone, whether it was
//! destroyed through this handle, replaced away, or cleared.

use std::time::Duration;

use tracing::trace;

use crate::animation::{OnComplete, TaskId};
use crate::toaster::Toaster;
use crate::widget::PanelId;

#[derive(Debug, Default)]
pub struct Toast {
    panel: Option<PanelId>,
    task: Option<TaskId>,
}

impl Toast {
    pub(crate) fn new(panel: PanelId) -> Self {
        Self {
            panel: Some(panel),
            task: None,
        }
    }

    /// The panel currently driven by this handle
    pub fn panel_id(&self) -> Option<PanelId> {
        self.panel
    }

    pub fn is_alive(&self, toaster: &Toaster) -> bool {
        self.live_panel(toaster).is_some()
    }

    /// Animate the toast in, optionally changing its text first
    pub fn show(&mut self, toaster: &mut Toaster, text: Option<&str>) {
        let Some(panel) = self.live_panel(toaster) else {
            return;
        };
        if let Some(text) = text {
            toaster.scene.set_text(panel, text);
        }
        self.restart(toaster, panel, 1.0);
    }

    /// Animate the toast out; it stays in the group, collapsed
    pub fn hide(&mut self, toaster: &mut Toaster) {
        let Some(panel) = self.live_panel(toaster) else {
            return;
        };
        self.restart(toaster, panel, 0.0);
    }

    /// Fade the current panel out while a copy with `text` grows in its place
    pub fn replace(&mut self, toaster: &mut Toaster, text: &str) {
        let Some(old) = self.live_panel(toaster) else {
            return;
        };
        self.cancel(toaster);

        // The outgoing panel runs detached from this handle
        toaster.animate(old, 0.0, OnComplete::DestroyPanel);

        let Some(clone) = toaster.scene.clone_after(old) else {
            return;
        };
        trace!(from = ?old, to = ?clone, "toast replaced");
        self.panel = Some(clone);
        self.show(toaster, Some(text));
    }

    /// Animate out and remove the panel.
    ///
    /// With a non-zero `delay` the toast stays up for that long in real time
    /// first, finishing a show that is still running. Calling this again, or
    /// on a dead toast, does nothing.
    pub fn destroy(&mut self, toaster: &mut Toaster, delay: Option<Duration>) {
        let Some(panel) = self.live_panel(toaster) else {
            self.panel = None;
            return;
        };
        match delay.filter(|delay| !delay.is_zero()) {
            Some(delay) => {
                toaster.destroy_after(panel, delay, self.task.take());
            }
            None => {
                self.cancel(toaster);
                toaster.animate(panel, 0.0, OnComplete::DestroyPanel);
            }
        }
        self.panel = None;
    }

    fn live_panel(&self, toaster: &Toaster) -> Option<PanelId> {
        self.panel.filter(|&id| toaster.scene.contains(id))
    }

    fn cancel(&mut self, toaster: &mut Toaster) {
        if let Some(task) = self.task.take() {
            toaster.scheduler.cancel(task);
        }
    }

    fn restart(&mut self, toaster: &mut Toaster, panel: PanelId, target: f32) {
        self.cancel(toaster);
        self.task = toaster.animate(panel, target, OnComplete::Nothing);
    }
}
