//! Collision helpers: one-way platforms, the floor, and circular hit tests

use glam::Vec2;

use super::state::Platform;
use crate::consts::FLOOR_Y;

/// Find the platform surface a body's feet crossed this tick.
///
/// A platform only catches a body whose feet were at or above its top on the
/// previous tick and are at or below it now, so bodies jump up through
/// platforms and fast falls cannot tunnel past them. When several tops were
/// crossed in one tick the highest one wins.
pub fn platform_landing(prev_feet: f32, feet: f32, x: f32, platforms: &[Platform]) -> Option<f32> {
    platforms
        .iter()
        .filter(|p| p.spans_x(x))
        .map(|p| p.top())
        .filter(|&top| prev_feet <= top && feet >= top)
        .min_by(|a, b| a.total_cmp(b))
}

/// Snap a body to the floor line if it sank below it. Returns true when grounded.
pub fn settle_on_floor(pos: &mut Vec2, vel: &mut Vec2) -> bool {
    if pos.y >= FLOOR_Y {
        pos.y = FLOOR_Y;
        vel.y = 0.0;
        true
    } else {
        false
    }
}

/// Circular overlap test used by punches, projectiles and pickups
#[inline]
pub fn within(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}
