// Axis-separated collision resolution
//
// The hitbox is displaced along X first and pushed out of whatever it hit,
// then along Y. Resolving the axes independently lets an entity slide along a
// wall while moving diagonally instead of sticking to it.

use glam::Vec2;

use super::obstacles::ObstacleIndex;
use crate::core::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Move `hitbox` by `direction.normalize() * speed` without entering any
/// obstacle. A zero direction leaves the hitbox where it is.
pub fn resolve_move(hitbox: Rect, direction: Vec2, speed: f32, obstacles: &ObstacleIndex) -> Rect {
    let step = direction.normalize_or_zero() * speed;
    let mut hitbox = hitbox;

    hitbox.x += step.x;
    resolve_axis(&mut hitbox, Axis::Horizontal, step.x, obstacles);

    hitbox.y += step.y;
    resolve_axis(&mut hitbox, Axis::Vertical, step.y, obstacles);

    hitbox
}

/// Push `hitbox` back out of every obstacle it overlaps, against the
/// direction of travel on `axis`
fn resolve_axis(hitbox: &mut Rect, axis: Axis, delta: f32, obstacles: &ObstacleIndex) {
    if delta == 0.0 {
        return;
    }

    let hits: Vec<Rect> = obstacles.query(*hitbox).map(|o| o.hitbox()).collect();
    if hits.is_empty() {
        return;
    }

    match (axis, delta > 0.0) {
        (Axis::Horizontal, true) => {
            let wall = hits.iter().map(Rect::left).fold(f32::INFINITY, f32::min);
            hitbox.set_right(wall);
        }
        (Axis::Horizontal, false) => {
            let wall = hits.iter().map(Rect::right).fold(f32::NEG_INFINITY, f32::max);
            hitbox.set_left(wall);
        }
        (Axis::Vertical, true) => {
            let wall = hits.iter().map(Rect::top).fold(f32::INFINITY, f32::min);
            hitbox.set_bottom(wall);
        }
        (Axis::Vertical, false) => {
            let wall = hits.iter().map(Rect::bottom).fold(f32::NEG_INFINITY, f32::max);
            hitbox.set_top(wall);
        }
    }
}
