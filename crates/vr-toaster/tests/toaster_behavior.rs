use std::time::Duration;

use serial_test::serial;
use vr_toaster::pose::frontal_pose;
use vr_toaster::{
    FrameTime, Point3D, Quaternion, Style, ToastGroup, ToastPosition, Toaster, ToasterConfig,
    ToasterError, TrackingFrame, Transform, Vector3D,
};

const FRAME: Duration = Duration::from_millis(50);

fn toaster() -> Toaster {
    Toaster::new(ToasterConfig::default()).unwrap()
}

fn run(toaster: &mut Toaster, frames: usize) {
    let tracking = TrackingFrame::default();
    for _ in 0..frames {
        toaster.update(FrameTime::uniform(FRAME), &tracking);
    }
}

fn texts(toaster: &Toaster, group: ToastGroup) -> Vec<String> {
    toaster.panels(group).map(|p| p.text().to_string()).collect()
}

#[test]
#[serial]
fn empty_style_table_gets_single_default() {
    let config = ToasterConfig::from_toml_str("padding = 0.1\nstyles = []\n").unwrap();
    let mut toaster = Toaster::new(config).unwrap();

    assert_eq!(toaster.styles().len(), 1);
    assert!(toaster.styles().contains("default"));

    let mut toast = toaster
        .make_toast(
            ToastGroup::RightHand,
            Some("still works"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toast.show(&mut toaster, None);
    run(&mut toaster, 8);
    assert_eq!(toaster.group(ToastGroup::RightHand).visible_count(), 1);
}

#[test]
#[serial]
fn configured_style_is_applied() {
    let config = ToasterConfig {
        styles: vec![Style::named("warning"), Style::named("default")],
        ..ToasterConfig::default()
    };
    let mut toaster = Toaster::new(config).unwrap();
    let toast = toaster
        .make_toast(
            ToastGroup::Frontal,
            Some("careful"),
            "warning",
            ToastPosition::Bottom,
        )
        .unwrap();
    let panel = toaster.panel(toast.panel_id().unwrap()).unwrap();
    assert_eq!(panel.style().name, "warning");
}

#[test]
#[serial]
fn unknown_style_is_rejected() {
    let mut toaster = toaster();
    let err = toaster
        .make_toast(ToastGroup::Frontal, None, "missing", ToastPosition::Bottom)
        .unwrap_err();
    assert_eq!(err.to_string(), "The style name 'missing' does not exist");

    let timed = toaster.timed_toast(
        ToastGroup::Frontal,
        "x",
        Duration::from_secs(1),
        "missing",
        ToastPosition::Bottom,
    );
    assert!(matches!(timed, Err(ToasterError::UnknownStyle(_))));
    assert_eq!(toaster.panel_count(), 0);
}

#[test]
#[serial]
fn second_toaster_leaves_first_in_charge() {
    let mut first = toaster();
    assert!(matches!(
        Toaster::new(ToasterConfig::default()),
        Err(ToasterError::AlreadyActive)
    ));
    assert!(first
        .make_toast(
            ToastGroup::LeftHand,
            Some("here"),
            "default",
            ToastPosition::Bottom,
        )
        .is_ok());
}

#[test]
#[serial]
fn double_destroy_is_harmless() {
    let mut toaster = toaster();
    let mut toast = toaster
        .make_toast(
            ToastGroup::LeftHand,
            Some("bye"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toast.show(&mut toaster, None);
    run(&mut toaster, 8);

    toast.destroy(&mut toaster, None);
    toast.destroy(&mut toaster, Some(Duration::from_secs(1)));
    run(&mut toaster, 8);

    assert_eq!(toaster.panel_count(), 0);
    assert_eq!(toaster.task_count(), 0);
}

#[test]
#[serial]
fn replace_leaves_only_new_text() {
    let mut toaster = toaster();
    let mut toast = toaster
        .make_toast(
            ToastGroup::RightHand,
            Some("old"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toast.show(&mut toaster, None);
    run(&mut toaster, 2);

    // Mid-animation replace
    toast.replace(&mut toaster, "new");
    run(&mut toaster, 10);
    assert_eq!(texts(&toaster, ToastGroup::RightHand), vec!["new"]);

    // Replacing again after it settled
    toast.replace(&mut toaster, "newer");
    run(&mut toaster, 10);
    assert_eq!(texts(&toaster, ToastGroup::RightHand), vec!["newer"]);
    assert_eq!(toaster.group(ToastGroup::RightHand).visible_count(), 1);
}

#[test]
#[serial]
fn redundant_show_does_not_count_twice() {
    let mut toaster = toaster();
    let mut toast = toaster
        .make_toast(
            ToastGroup::Frontal,
            Some("once"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toast.show(&mut toaster, None);
    run(&mut toaster, 8);
    assert_eq!(toaster.group(ToastGroup::Frontal).visible_count(), 1);

    toast.show(&mut toaster, None);
    run(&mut toaster, 8);
    assert_eq!(toaster.group(ToastGroup::Frontal).visible_count(), 1);

    toast.hide(&mut toaster);
    run(&mut toaster, 8);
    toast.hide(&mut toaster);
    run(&mut toaster, 8);
    assert_eq!(toaster.group(ToastGroup::Frontal).visible_count(), 0);
}

#[test]
#[serial]
fn visible_count_tracks_completed_shows_and_hides() {
    let mut toaster = toaster();
    let mut toasts: Vec<_> = (0..5)
        .map(|i| {
            toaster
                .make_toast(
                    ToastGroup::LeftHand,
                    Some(&format!("toast {i}")),
                    "default",
                    ToastPosition::Bottom,
                )
                .unwrap()
        })
        .collect();

    for toast in &mut toasts {
        toast.show(&mut toaster, None);
    }
    run(&mut toaster, 8);
    assert_eq!(toaster.group(ToastGroup::LeftHand).visible_count(), 5);

    for toast in toasts.iter_mut().take(2) {
        toast.hide(&mut toaster);
    }
    run(&mut toaster, 8);
    assert_eq!(toaster.group(ToastGroup::LeftHand).visible_count(), 3);
    assert_eq!(toaster.group(ToastGroup::RightHand).visible_count(), 0);
}

#[test]
#[serial]
fn first_frontal_toast_snaps_into_place() {
    let mut toaster = toaster();
    let tracking = TrackingFrame {
        head: Transform::from_position_rotation(
            Point3D::new(2.0, 1.7, -1.0),
            Quaternion::from_axis_angle(Vector3D::UP, 1.2),
        ),
        ..TrackingFrame::default()
    };
    let mut toast = toaster
        .make_toast(
            ToastGroup::Frontal,
            Some("look"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toast.show(&mut toaster, None);

    let mut frames = 0;
    while toaster.group(ToastGroup::Frontal).visible_count() == 0 {
        toaster.update(FrameTime::uniform(FRAME), &tracking);
        frames += 1;
        assert!(frames < 20, "show never completed");
    }

    let expected = frontal_pose(&tracking, Point3D::ORIGIN, &toaster.config().frontal, true);
    let root = toaster.group(ToastGroup::Frontal).transform();
    assert!(root.position.distance(&expected.position) < 1e-4);
    assert_eq!(root.rotation, expected.rotation);
}

#[test]
#[serial]
fn top_and_bottom_slots() {
    let mut toaster = toaster();
    toaster
        .make_toast(
            ToastGroup::LeftHand,
            Some("Middle"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toaster
        .make_toast(
            ToastGroup::LeftHand,
            Some("Hello"),
            "default",
            ToastPosition::Top,
        )
        .unwrap();
    toaster
        .make_toast(
            ToastGroup::LeftHand,
            Some("World"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();

    assert_eq!(
        texts(&toaster, ToastGroup::LeftHand),
        vec!["Hello", "Middle", "World"],
    );
}

#[test]
#[serial]
fn zero_duration_timed_toast_does_nothing() {
    let mut toaster = toaster();
    toaster
        .timed_toast(
            ToastGroup::Frontal,
            "Bye",
            Duration::ZERO,
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    assert_eq!(toaster.panel_count(), 0);
    assert_eq!(toaster.task_count(), 0);
}

#[test]
#[serial]
fn timed_toast_holds_through_pause() {
    let mut toaster = toaster();
    let tracking = TrackingFrame::default();
    toaster
        .timed_toast(
            ToastGroup::RightHand,
            "Saved",
            Duration::from_secs(1),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();

    run(&mut toaster, 6);
    assert_eq!(toaster.group(ToastGroup::RightHand).visible_count(), 1);

    // Game time stopped, real time keeps the hold running
    for _ in 0..12 {
        toaster.update(FrameTime::paused(Duration::from_millis(100)), &tracking);
    }
    assert_eq!(toaster.panel_count(), 1);

    run(&mut toaster, 8);
    assert_eq!(toaster.panel_count(), 0);
    assert_eq!(toaster.group(ToastGroup::RightHand).visible_count(), 0);
}

#[test]
#[serial]
fn clear_drops_everything_and_handles_go_dead() {
    let mut toaster = toaster();
    let mut toast = toaster
        .make_toast(
            ToastGroup::Frontal,
            Some("a"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    toast.show(&mut toaster, None);
    toaster
        .timed_toast(
            ToastGroup::LeftHand,
            "b",
            Duration::from_secs(5),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    run(&mut toaster, 3);

    toaster.clear();
    assert_eq!(toaster.panel_count(), 0);
    assert_eq!(toaster.task_count(), 0);
    assert!(!toast.is_alive(&toaster));

    toast.show(&mut toaster, Some("back?"));
    toast.destroy(&mut toaster, None);
    run(&mut toaster, 4);
    assert_eq!(toaster.panel_count(), 0);
}

#[test]
#[serial]
fn handle_from_previous_toaster_stays_dead() {
    let mut first = toaster();
    let mut stale = first
        .make_toast(
            ToastGroup::Frontal,
            Some("old session"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    first.shutdown();

    let mut second = toaster();
    let fresh = second
        .make_toast(
            ToastGroup::Frontal,
            Some("new session"),
            "default",
            ToastPosition::Bottom,
        )
        .unwrap();
    assert_ne!(stale.panel_id(), fresh.panel_id());
    assert!(!stale.is_alive(&second));

    stale.show(&mut second, Some("hijacked"));
    stale.replace(&mut second, "hijacked");
    stale.destroy(&mut second, None);
    assert_eq!(second.task_count(), 0);

    let panel = second.panel(fresh.panel_id().unwrap()).unwrap();
    assert_eq!(panel.text(), "new session");
    assert!(fresh.is_alive(&second));
}
