// Moving entity base: sprite rect, hitbox and collision-resolved movement

use glam::Vec2;

use super::characters::FrameCursor;
use crate::core::Rect;
use crate::engine::physics::{resolve_move, ObstacleIndex};

/// Shared state of everything that walks the map.
///
/// The hitbox is the source of truth for position; the visual rect is always
/// re-centred on it after a move or a frame change.
#[derive(Debug, Clone)]
pub struct Entity {
    rect: Rect,
    hitbox: Rect,
    /// Movement intent, each axis in {-1, 0, 1}
    pub direction: Vec2,
    cursor: FrameCursor,
}

impl Entity {
    /// `hitbox_offset` is the total width/height change from rect to hitbox
    pub fn new(rect: Rect, hitbox_offset: Vec2, animation_speed: f32) -> Self {
        Self {
            rect,
            hitbox: rect.inflate(hitbox_offset.x, hitbox_offset.y),
            direction: Vec2::ZERO,
            cursor: FrameCursor::new(animation_speed),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    /// Move by `direction * speed`, stopping at obstacles
    pub fn move_by(&mut self, speed: f32, obstacles: &ObstacleIndex) {
        self.hitbox = resolve_move(self.hitbox, self.direction, speed, obstacles);
        self.rect.set_center(self.hitbox.center());
    }

    /// Advance the animation cursor through a clip of `frame_count` frames
    pub fn next_frame(&mut self, frame_count: usize) -> usize {
        self.cursor.advance(frame_count)
    }

    /// Resize the visual rect to a new frame, centred on the hitbox
    pub fn fit_frame(&mut self, size: Vec2) {
        self.rect = Rect::from_center(self.hitbox.center(), size);
    }
}
