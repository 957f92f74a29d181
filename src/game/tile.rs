// Static map tiles

use glam::Vec2;

use super::settings::{OBSTACLE_HITBOX_OFFSET, OBSTACLE_TEXTURE, TILE_SIZE};
use crate::core::Rect;
use crate::engine::assets::{SpriteFrame, TextureHandle};
use crate::engine::physics::Obstacle;
use crate::engine::renderer::Drawable;

/// A visible, solid map cell
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    rect: Rect,
    frame: SpriteFrame,
}

impl Tile {
    pub fn new(topleft: Vec2) -> Self {
        Self {
            rect: Rect::new(topleft.x, topleft.y, TILE_SIZE, TILE_SIZE),
            frame: SpriteFrame::new(
                TextureHandle::from_path(OBSTACLE_TEXTURE),
                Vec2::splat(TILE_SIZE),
            ),
        }
    }

    /// The collision shape this tile contributes
    pub fn obstacle(&self) -> Obstacle {
        Obstacle::new(self.hitbox())
    }
}

impl Drawable for Tile {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn hitbox(&self) -> Rect {
        self.rect
            .inflate(OBSTACLE_HITBOX_OFFSET.x, OBSTACLE_HITBOX_OFFSET.y)
    }

    fn frame(&self) -> SpriteFrame {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_covers_one_cell() {
        let tile = Tile::new(Vec2::new(128.0, 64.0));
        assert_eq!(tile.rect(), Rect::new(128.0, 64.0, TILE_SIZE, TILE_SIZE));
        assert_eq!(tile.obstacle().hitbox(), tile.rect());
        assert_eq!(tile.alpha(), 255);
    }
}
