// Stand-in frames when no asset directory is available

use super::{AnimationSource, AssetError, SpriteFrame, TextureHandle};
use glam::Vec2;

/// Every animation gets `count` frames of the same size
#[derive(Debug, Clone, Copy)]
pub struct UniformFrames {
    size: Vec2,
    count: usize,
}

impl UniformFrames {
    pub fn new(size: Vec2, count: usize) -> Self {
        Self { size, count }
    }
}

impl AnimationSource for UniformFrames {
    fn frames(&self, animation: &str) -> Result<Vec<SpriteFrame>, AssetError> {
        Ok((0..self.count)
            .map(|i| {
                SpriteFrame::new(
                    TextureHandle::from_path(&format!("{animation}/{i}")),
                    self.size,
                )
            })
            .collect())
    }
}
