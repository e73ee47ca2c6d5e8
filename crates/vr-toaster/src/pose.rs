//! Where the group roots sit relative to the head and hands

use crate::config::{FrontalSettings, HandSettings};
use crate::input::{Hand, TrackingFrame};
use crate::spatial::{Point3D, Quaternion, EPSILON};

/// World position and orientation of a group root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point3D,
    pub rotation: Quaternion,
}

/// Pose of a hand group.
///
/// The head-to-hand direction is swung sideways around the play area's up
/// axis (outward for each hand), limited to `max_head_angle` away from the
/// head's forward direction and kept at least `min_head_distance` away from
/// the head. The panel faces along that direction.
pub fn hand_pose(tracking: &TrackingFrame, hand: Hand, settings: &HandSettings) -> Pose {
    let head = tracking.head.position;
    let up = tracking.play_area.up();

    let swing = Quaternion::from_axis_angle(up, (hand.sign() * settings.angle).to_radians());
    let toward_hand = swing * (tracking.hand(hand) - head);

    let reference = tracking.head.forward().normalize() * settings.min_head_distance;
    let clamped = reference.rotate_towards(
        &toward_hand,
        settings.max_head_angle.to_radians(),
        f32::INFINITY,
    );

    let direction = if clamped.magnitude_squared() > EPSILON {
        clamped.normalize()
    } else {
        reference.normalize()
    };
    let offset = direction * clamped.magnitude().max(settings.min_head_distance);

    Pose {
        position: head + offset,
        rotation: Quaternion::look_rotation(offset, up),
    }
}

/// Pose of the frontal group.
///
/// The target offset is the head's forward direction in play area space
/// with its vertical component replaced by the configured vertical offset,
/// scaled to the configured horizontal distance. Unless `snap` is set the
/// current offset moves toward it by the smoothing fraction of the arc.
pub fn frontal_pose(
    tracking: &TrackingFrame,
    current: Point3D,
    settings: &FrontalSettings,
    snap: bool,
) -> Pose {
    let head = tracking.head.position;
    let play_area = &tracking.play_area;

    let mut local = play_area.inverse_transform_direction(tracking.head.forward());
    local.y = settings.position.vertical;
    let target = play_area.transform_direction(local).normalize() * settings.position.horizontal;

    let offset = if snap {
        target
    } else {
        (current - head).slerp(&target, settings.smoothing)
    };

    Pose {
        position: head + offset,
        rotation: Quaternion::look_rotation(offset, play_area.up()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{Transform, Vector3D};
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vector3D, b: Vector3D) -> bool {
        (a - b).magnitude() < 0.001
    }

    fn standing() -> TrackingFrame {
        TrackingFrame {
            head: Transform::from_position(Point3D::new(0.0, 1.6, 0.0)),
            left_hand: Point3D::new(-0.3, 1.2, 0.4),
            right_hand: Point3D::new(0.3, 1.2, 0.4),
            ..TrackingFrame::default()
        }
    }

    #[test]
    fn test_hand_poses_mirror() {
        let tracking = standing();
        let settings = HandSettings::default();

        let left = hand_pose(&tracking, Hand::Left, &settings);
        let right = hand_pose(&tracking, Hand::Right, &settings);

        assert!((left.position.x + right.position.x).abs() < 0.001);
        assert!((left.position.y - right.position.y).abs() < 0.001);
        assert!(right.position.x > 0.3);
    }

    #[test]
    fn test_hand_pose_respects_min_distance() {
        let tracking = standing();
        let settings = HandSettings::default();

        let pose = hand_pose(&tracking, Hand::Right, &settings);
        let distance = pose.position.distance(&tracking.head.position);
        assert!((distance - settings.min_head_distance).abs() < 0.001);

        let offset = pose.position - tracking.head.position;
        assert!(approx(pose.rotation.forward(), offset.normalize()));
    }

    #[test]
    fn test_hand_pose_clamped_to_head_angle() {
        let mut tracking = standing();
        // Hand stretched out sideways, far outside the allowed cone
        tracking.right_hand = Point3D::new(2.0, 1.6, 0.0);
        let settings = HandSettings::default();

        let pose = hand_pose(&tracking, Hand::Right, &settings);
        let offset = pose.position - tracking.head.position;
        let angle = offset.angle(&tracking.head.forward());
        assert!((angle - settings.max_head_angle.to_radians()).abs() < 0.001);
        // A far hand pushes the panel further out than the minimum
        assert!((offset.magnitude() - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_frontal_snap_hits_target() {
        let tracking = standing();
        let settings = FrontalSettings::default();

        let pose = frontal_pose(&tracking, Point3D::ORIGIN, &settings, true);
        let offset = pose.position - tracking.head.position;
        let expected = Vector3D::new(0.0, 0.1, 1.0).normalize() * 1.5;
        assert!(approx(offset, expected));
    }

    #[test]
    fn test_frontal_smoothing_moves_partway() {
        let mut tracking = standing();
        let settings = FrontalSettings::default();
        let start = frontal_pose(&tracking, Point3D::ORIGIN, &settings, true);

        // Turn the head 90 degrees to the right
        tracking.head.rotation = Quaternion::from_axis_angle(Vector3D::UP, FRAC_PI_2);
        let target = frontal_pose(&tracking, start.position, &settings, true);
        let smoothed = frontal_pose(&tracking, start.position, &settings, false);

        let head = tracking.head.position;
        let moved = (smoothed.position - head).angle(&(start.position - head));
        let total = (target.position - head).angle(&(start.position - head));
        assert!((moved - total * settings.smoothing).abs() < 0.001);
        assert!((smoothed.position.distance(&head) - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_frontal_follows_tilted_play_area() {
        let mut tracking = standing();
        tracking.play_area.rotation = Quaternion::from_axis_angle(Vector3D::FORWARD, 0.3);
        tracking.head.rotation = tracking.play_area.rotation;
        let settings = FrontalSettings::default();

        let pose = frontal_pose(&tracking, Point3D::ORIGIN, &settings, true);
        let offset = pose.position - tracking.head.position;
        let local = tracking.play_area.inverse_transform_direction(offset);
        assert!(approx(local, Vector3D::new(0.0, 0.1, 1.0).normalize() * 1.5));
        // The panel's up axis stays in the plane of its forward and the play area's up
        let normal = offset.cross(&tracking.play_area.up());
        assert!(pose.rotation.up().dot(&normal).abs() < 0.001);
    }
}
