// Draw target that records blits instead of rasterizing them

use super::DrawTarget;
use crate::engine::assets::SpriteFrame;
use glam::Vec2;

/// A single recorded blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub frame: SpriteFrame,
    /// Screen-space top-left corner
    pub position: Vec2,
    pub alpha: u8,
}

/// Collects one frame's draw calls in submission order.
/// A presentation backend replays them; tests inspect them.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for FrameRecorder {
    fn blit(&mut self, frame: SpriteFrame, position: Vec2, alpha: u8) {
        self.commands.push(DrawCommand {
            frame,
            position,
            alpha,
        });
    }
}
