//! Decides when a member is already at its target, so reconciliation can be
//! run on every visual update without emitting imperceptible motion.

use glam::Vec3;

use crate::api::config::LayoutConfig;
use crate::components::displayable::Transform;

/// Shortest signed arc in degrees from `current` to `target`, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Per-axis shortest-arc delta between two sets of Euler angles.
pub fn euler_delta(current: Vec3, target: Vec3) -> Vec3 {
    Vec3::new(
        delta_angle(current.x, target.x),
        delta_angle(current.y, target.y),
        delta_angle(current.z, target.z),
    )
}

/// True when `current` already matches the target within the configured
/// tolerances. Rotation is only compared when the layout specifies one.
pub fn is_equivalent(
    current: &Transform,
    position: Vec3,
    rotation: Option<Vec3>,
    scale: f32,
    config: &LayoutConfig,
) -> bool {
    if current.position.distance(position) > config.position_tolerance {
        return false;
    }

    if let Some(rotation) = rotation {
        let delta = euler_delta(current.rotation, rotation).abs();
        if delta.max_element() > config.rotation_tolerance_degrees {
            return false;
        }
    }

    Vec3::splat(current.scale).distance(Vec3::splat(scale)) <= config.scale_tolerance
}
