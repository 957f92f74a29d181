// Rendering: y-sorted camera pass over drawable sprites

mod camera;
mod recorder;

pub use camera::CameraGroup;
pub use recorder::{DrawCommand, FrameRecorder};

use crate::core::Rect;
use crate::engine::assets::SpriteFrame;
use glam::Vec2;

/// Anything the camera can paint
pub trait Drawable {
    /// Visual rectangle in world space
    fn rect(&self) -> Rect;

    /// Collision rectangle; the camera centers on this when tracking
    fn hitbox(&self) -> Rect {
        self.rect()
    }

    /// Frame to draw this tick
    fn frame(&self) -> SpriteFrame;

    /// Opacity, 255 = fully opaque
    fn alpha(&self) -> u8 {
        255
    }
}

/// Backend that puts frames on screen
pub trait DrawTarget {
    fn blit(&mut self, frame: SpriteFrame, position: Vec2, alpha: u8);
}
