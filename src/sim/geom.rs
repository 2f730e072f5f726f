//! Circle overlap geometry

use glam::Vec2;

/// Check whether two circles touch: they overlap, but neither fully
/// contains the other. The containment case is excluded so that a bubble
/// engulfing a smaller one does not keep reversing it every tick.
pub fn circles_touching(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let distance = a_pos.distance(b_pos);

    if distance > a_radius + b_radius {
        return false;
    }
    if distance <= (a_radius - b_radius).abs() {
        return false;
    }

    true
}
