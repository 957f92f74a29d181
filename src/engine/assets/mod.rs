// Asset access
//
// The core never owns pixels. Sprites reference textures through typed
// handles, and animation frames come from an injected `AnimationSource`
// so the game logic can run against real files or placeholders alike.

mod handle;
mod loader;
mod placeholder;

pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use loader::AssetLoader;
pub use placeholder::UniformFrames;

use glam::Vec2;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Missing animation: {0}")]
    MissingAnimation(String),

    #[error("Animation has no frames: {0}")]
    EmptyAnimation(String),

    #[error("Failed to read image: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One frame of an animation: which texture to draw and how big it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub texture: TextureHandle,
    pub size: Vec2,
}

impl SpriteFrame {
    pub fn new(texture: TextureHandle, size: Vec2) -> Self {
        Self { texture, size }
    }
}

/// Read-only provider of animation frames, keyed by animation name
pub trait AnimationSource {
    fn frames(&self, animation: &str) -> Result<Vec<SpriteFrame>, AssetError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("player/up".to_string());
        assert_eq!(err.to_string(), "Asset not found: player/up");

        let err = AssetError::EmptyAnimation("down_attack".to_string());
        assert_eq!(err.to_string(), "Animation has no frames: down_attack");
    }
}
