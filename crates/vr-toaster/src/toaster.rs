//! The toaster: owns the group roots, the style table and the running
//! animations, and moves the groups with the user every frame.
//!
//! Only one toaster may be alive per process. Create it once, pass it to
//! whoever raises toasts, and call [`Toaster::update`] once per frame.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::animation::{OnComplete, PanelHost, Scheduler, Task, TaskId, ToastTween};
use crate::config::ToasterConfig;
use crate::error::{Result, ToasterError};
use crate::input::{FrameTime, Hand, TrackingFrame};
use crate::pose::{frontal_pose, hand_pose, Pose};
use crate::style::StyleTable;
use crate::toast::Toast;
use crate::widget::{GroupRoot, Panel, PanelId, ToastGroup, ToastPosition};

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Group roots, panels and the latest tracking data
#[derive(Debug)]
pub(crate) struct Scene {
    config: ToasterConfig,
    styles: StyleTable,
    groups: [GroupRoot; 3],
    panels: HashMap<PanelId, Panel>,
    tracking: TrackingFrame,
}

impl Scene {
    fn new(config: ToasterConfig) -> Self {
        let styles = StyleTable::new(config.styles.clone());
        let groups = ToastGroup::ALL.map(|group| GroupRoot::new(group, config.metrics(group)));

        Self {
            config,
            styles,
            groups,
            panels: HashMap::new(),
            tracking: TrackingFrame::default(),
        }
    }

    fn group_mut(&mut self, group: ToastGroup) -> &mut GroupRoot {
        &mut self.groups[group.index()]
    }

    pub(crate) fn contains(&self, id: PanelId) -> bool {
        self.panels.contains_key(&id)
    }

    fn rebuild_layout(&mut self, group: ToastGroup) {
        self.groups[group.index()].rebuild_layout(&mut self.panels);
    }

    /// Build a collapsed, invisible panel and insert it into its group
    fn create_panel(
        &mut self,
        group: ToastGroup,
        text: &str,
        style: &str,
        position: ToastPosition,
    ) -> Result<PanelId> {
        let style = self
            .styles
            .get(style)
            .cloned()
            .ok_or_else(|| ToasterError::UnknownStyle(style.to_string()))?;

        let id = PanelId::next();
        let metrics = self.groups[group.index()].metrics;
        self.panels.insert(id, Panel::new(id, group, text, style, &metrics));
        self.group_mut(group).insert(id, position);
        self.rebuild_layout(group);

        debug!(panel = ?id, ?group, ?position, "toast created");
        Ok(id)
    }

    /// Copy `id` into a fresh collapsed panel placed right after it
    pub(crate) fn clone_after(&mut self, id: PanelId) -> Option<PanelId> {
        let clone_id = PanelId::next();
        let clone = self.panels.get(&id)?.clone_as(clone_id);
        let group = clone.group();

        self.panels.insert(clone_id, clone);
        self.group_mut(group).insert_after(id, clone_id);
        self.rebuild_layout(group);
        Some(clone_id)
    }

    pub(crate) fn set_text(&mut self, id: PanelId, text: &str) {
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.set_text(text);
            let group = panel.group();
            self.rebuild_layout(group);
        }
    }

    fn destroy_panel(&mut self, id: PanelId) -> bool {
        let Some(panel) = self.panels.remove(&id) else {
            return false;
        };

        let root = self.group_mut(panel.group());
        root.remove(id);
        if panel.counted_visible {
            root.visible_count = root.visible_count.saturating_sub(1);
        }
        self.rebuild_layout(panel.group());

        debug!(panel = ?id, group = ?panel.group(), "toast destroyed");
        true
    }

    /// Destroy every panel right away, without animation
    fn clear(&mut self) -> usize {
        let count = self.panels.len();
        self.panels.clear();
        for root in &mut self.groups {
            root.children.clear();
            root.visible_count = 0;
        }
        for group in ToastGroup::ALL {
            self.rebuild_layout(group);
        }
        count
    }

    /// Count a finished show or hide, once per panel transition
    fn update_visibility(&mut self, id: PanelId, shown: bool) {
        let Some(panel) = self.panels.get_mut(&id) else {
            return;
        };
        if panel.counted_visible == shown {
            return;
        }
        panel.counted_visible = shown;
        let group = panel.group();

        if shown {
            if group.is_frontal() && self.groups[group.index()].visible_count == 0 {
                // First frontal toast: jump straight in front of the user
                self.update_frontal_pose(true);
            }
            self.group_mut(group).visible_count += 1;
        } else {
            let root = self.group_mut(group);
            root.visible_count = root.visible_count.saturating_sub(1);
        }
    }

    fn update_hand_pose(&mut self, hand: Hand) {
        let group = match hand {
            Hand::Left => ToastGroup::LeftHand,
            Hand::Right => ToastGroup::RightHand,
        };
        let pose = hand_pose(&self.tracking, hand, &self.config.hand);
        self.set_pose(group, pose);
    }

    fn update_frontal_pose(&mut self, snap: bool) {
        let current = self.groups[ToastGroup::Frontal.index()].transform.position;
        let pose = frontal_pose(&self.tracking, current, &self.config.frontal, snap);
        self.set_pose(ToastGroup::Frontal, pose);
    }

    fn set_pose(&mut self, group: ToastGroup, pose: Pose) {
        self.group_mut(group)
            .transform
            .set_position_and_rotation(pose.position, pose.rotation);
    }

    /// Move every group that has at least one visible toast
    fn update_poses(&mut self) {
        if self.groups[ToastGroup::LeftHand.index()].visible_count > 0 {
            self.update_hand_pose(Hand::Left);
        }
        if self.groups[ToastGroup::RightHand.index()].visible_count > 0 {
            self.update_hand_pose(Hand::Right);
        }
        if self.groups[ToastGroup::Frontal.index()].visible_count > 0 {
            self.update_frontal_pose(false);
        }
    }
}

impl PanelHost for Scene {
    fn panel_value(&self, panel: PanelId) -> Option<f32> {
        self.panels.get(&panel).map(Panel::scale_y)
    }

    fn apply_value(&mut self, panel: PanelId, value: f32) -> bool {
        let Some(p) = self.panels.get_mut(&panel) else {
            return false;
        };
        p.apply(value);
        let group = p.group();
        // Siblings reflow while this panel grows or collapses
        self.rebuild_layout(group);
        true
    }

    fn animation_finished(&mut self, panel: PanelId, tween: &ToastTween, on_complete: OnComplete) {
        if tween.changes_state() {
            self.update_visibility(panel, tween.target() >= 1.0);
        }
        if on_complete == OnComplete::DestroyPanel {
            self.destroy_panel(panel);
        }
    }
}

/// Owner of all toast groups. See the module docs.
#[derive(Debug)]
pub struct Toaster {
    pub(crate) scene: Scene,
    pub(crate) scheduler: Scheduler,
}

impl Toaster {
    /// Create the process's toaster.
    ///
    /// Fails with [`ToasterError::AlreadyActive`] while another toaster is
    /// alive; the existing one stays authoritative.
    pub fn new(mut config: ToasterConfig) -> Result<Self> {
        config.validate()?;

        if ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("a toaster is already active, discarding the new instance");
            return Err(ToasterError::AlreadyActive);
        }

        let scene = Scene::new(config);
        debug!(
            styles = scene.styles.len(),
            roots = ?ToastGroup::ALL.map(ToastGroup::root_name),
            "toaster created"
        );

        Ok(Self {
            scene,
            scheduler: Scheduler::new(),
        })
    }

    /// Whether a toaster is currently alive in this process
    pub fn is_active() -> bool {
        ACTIVE.load(Ordering::Acquire)
    }

    /// Create a collapsed toast; call [`Toast::show`] to animate it in.
    ///
    /// `Top` inserts the toast above the group's existing toasts, `Bottom`
    /// below them.
    pub fn make_toast(
        &mut self,
        group: ToastGroup,
        text: Option<&str>,
        style: &str,
        position: ToastPosition,
    ) -> Result<Toast> {
        let panel = self.scene.create_panel(group, text.unwrap_or_default(), style, position)?;
        Ok(Toast::new(panel))
    }

    /// Show a toast for `duration`, then remove it. Fire and forget.
    ///
    /// A zero duration does nothing at all.
    pub fn timed_toast(
        &mut self,
        group: ToastGroup,
        text: &str,
        duration: Duration,
        style: &str,
        position: ToastPosition,
    ) -> Result<()> {
        if duration.is_zero() {
            trace!("zero duration timed toast skipped");
            return Ok(());
        }

        let panel = self.scene.create_panel(group, text, style, position)?;
        self.scheduler.start(Task::timed(panel, 0.0, duration));
        Ok(())
    }

    /// Remove every toast from every group immediately
    pub fn clear(&mut self) {
        self.scheduler.cancel_all();
        let removed = self.scene.clear();
        debug!(removed, "toasts cleared");
    }

    /// Advance one frame: move the visible groups, then step the animations
    pub fn update(&mut self, frame: FrameTime, tracking: &TrackingFrame) {
        self.scene.tracking.clone_from(tracking);
        self.scene.update_poses();
        self.scheduler.advance(&mut self.scene, &frame);
    }

    /// Tear down all groups and release the process slot
    pub fn shutdown(self) {
        debug!(panels = self.scene.panels.len(), "toaster shutting down");
    }

    /// Start a show/hide animation of `panel` from its current value
    pub(crate) fn animate(
        &mut self,
        panel: PanelId,
        target: f32,
        on_complete: OnComplete,
    ) -> Option<TaskId> {
        let start = self.scene.panel_value(panel)?;
        Some(self.scheduler.start(Task::animate(panel, start, target, on_complete)))
    }

    /// Destroy `panel` after a real-time delay; the handle's running
    /// animation, if any, keeps playing until then
    pub(crate) fn destroy_after(
        &mut self,
        panel: PanelId,
        delay: Duration,
        running: Option<TaskId>,
    ) -> TaskId {
        let running = running.and_then(|task| self.scheduler.take(task));
        self.scheduler.start(Task::delayed_destroy(panel, delay, running))
    }

    pub fn group(&self, group: ToastGroup) -> &GroupRoot {
        &self.scene.groups[group.index()]
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.scene.panels.get(&id)
    }

    /// Panels of `group` in stacking order
    pub fn panels(&self, group: ToastGroup) -> impl Iterator<Item = &Panel> {
        self.group(group)
            .children()
            .iter()
            .filter_map(|id| self.scene.panels.get(id))
    }

    pub fn panel_count(&self) -> usize {
        self.scene.panels.len()
    }

    pub fn task_count(&self) -> usize {
        self.scheduler.len()
    }

    pub fn styles(&self) -> &StyleTable {
        &self.scene.styles
    }

    pub fn config(&self) -> &ToasterConfig {
        &self.scene.config
    }

    pub fn tracking(&self) -> &TrackingFrame {
        &self.scene.tracking
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
        self.scene.clear();
        ACTIVE.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const FRAME: Duration = Duration::from_millis(50);

    fn run(toaster: &mut Toaster, frames: usize) {
        let tracking = TrackingFrame::default();
        for _ in 0..frames {
            toaster.update(FrameTime::uniform(FRAME), &tracking);
        }
    }

    #[test]
    #[serial]
    fn test_second_toaster_is_rejected() {
        let first = Toaster::new(ToasterConfig::default()).unwrap();
        assert!(Toaster::is_active());
        assert!(matches!(
            Toaster::new(ToasterConfig::default()),
            Err(ToasterError::AlreadyActive)
        ));

        // The first instance keeps working
        drop(first);
        assert!(!Toaster::is_active());
        let again = Toaster::new(ToasterConfig::default()).unwrap();
        again.shutdown();
        assert!(!Toaster::is_active());
    }

    #[test]
    #[serial]
    fn test_invalid_config_does_not_claim_slot() {
        let mut config = ToasterConfig::default();
        config.hand.density = 0;
        assert!(matches!(Toaster::new(config), Err(ToasterError::Config(_))));
        assert!(!Toaster::is_active());
    }

    #[test]
    #[serial]
    fn test_empty_styles_recover() {
        let config = ToasterConfig {
            styles: Vec::new(),
            ..ToasterConfig::default()
        };
        let mut toaster = Toaster::new(config).unwrap();
        assert_eq!(toaster.styles().len(), 1);
        assert!(toaster
            .make_toast(
                ToastGroup::Frontal,
                Some("ok"),
                "default",
                ToastPosition::Bottom,
            )
            .is_ok());
    }

    #[test]
    #[serial]
    fn test_unknown_style_fails() {
        let mut toaster = Toaster::new(ToasterConfig::default()).unwrap();
        let result = toaster.make_toast(
            ToastGroup::LeftHand,
            Some("x"),
            "fancy",
            ToastPosition::Bottom,
        );
        let Err(ToasterError::UnknownStyle(name)) = result else {
            panic!("expected an unknown style error");
        };
        assert_eq!(name, "fancy");
        assert_eq!(toaster.panel_count(), 0);
    }

    #[test]
    #[serial]
    fn test_layout_stacks_children() {
        let mut toaster = Toaster::new(ToasterConfig::default()).unwrap();
        let mut a = toaster
            .make_toast(
                ToastGroup::RightHand,
                Some("first"),
                "default",
                ToastPosition::Bottom,
            )
            .unwrap();
        let mut b = toaster
            .make_toast(
                ToastGroup::RightHand,
                Some("second"),
                "default",
                ToastPosition::Bottom,
            )
            .unwrap();
        assert_eq!(toaster.group(ToastGroup::RightHand).content_height(), 0.0);

        a.show(&mut toaster, None);
        b.show(&mut toaster, None);
        run(&mut toaster, 6);

        let panels: Vec<&Panel> = toaster.panels(ToastGroup::RightHand).collect();
        assert_eq!(panels[0].top(), 0.0);
        assert!((panels[1].top() - panels[0].height()).abs() < 0.001);
        let root = toaster.group(ToastGroup::RightHand);
        assert!((root.content_height() - panels[0].height() - panels[1].height()).abs() < 0.001);
    }

    #[test]
    #[serial]
    fn test_hand_group_follows_when_visible() {
        let mut toaster = Toaster::new(ToasterConfig::default()).unwrap();
        let mut toast = toaster
            .make_toast(
                ToastGroup::LeftHand,
                Some("hi"),
                "default",
                ToastPosition::Bottom,
            )
            .unwrap();
        toast.show(&mut toaster, None);
        run(&mut toaster, 6);
        assert_eq!(toaster.group(ToastGroup::LeftHand).visible_count(), 1);

        let tracking = TrackingFrame::default();
        toaster.update(FrameTime::uniform(FRAME), &tracking);
        let expected = hand_pose(&tracking, Hand::Left, &toaster.config().hand);
        assert_eq!(
            toaster.group(ToastGroup::LeftHand).transform().position,
            expected.position,
        );
        // Idle groups stay where they are
        assert_eq!(
            toaster.group(ToastGroup::RightHand).transform().position,
            crate::spatial::Point3D::ORIGIN
        );
    }

    #[test]
    #[serial]
    fn test_clear_removes_everything() {
        let mut toaster = Toaster::new(ToasterConfig::default()).unwrap();
        for group in ToastGroup::ALL {
            let mut toast = toaster
                .make_toast(group, Some("bye"), "default", ToastPosition::Bottom)
                .unwrap();
            toast.show(&mut toaster, None);
        }
        toaster
            .timed_toast(
                ToastGroup::Frontal,
                "later",
                Duration::from_secs(3),
                "default",
                ToastPosition::Top,
            )
            .unwrap();
        run(&mut toaster, 6);

        toaster.clear();
        assert_eq!(toaster.panel_count(), 0);
        assert_eq!(toaster.task_count(), 0);
        for group in ToastGroup::ALL {
            assert!(toaster.group(group).children().is_empty());
            assert_eq!(toaster.group(group).visible_count(), 0);
        }
    }
}
