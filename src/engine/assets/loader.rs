// Directory-backed animation frames

use super::{AnimationSource, AssetError, SpriteFrame, TextureHandle};
use glam::Vec2;
use log::debug;
use std::path::{Path, PathBuf};

/// Supported image file extensions
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Reads animation frames laid out as `<base>/<animation>/<frame>.png`.
/// Frames play in file-name order; only image headers are read, to learn
/// each frame's size. Pixels stay with the presentation layer.
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the frames of one animation
    pub fn resolve_path(&self, animation: &str) -> PathBuf {
        self.base_path.join(animation)
    }

    /// Sorted image files of one animation
    pub fn list_frames(&self, animation: &str) -> Result<Vec<PathBuf>, AssetError> {
        let dir = self.resolve_path(animation);
        if !dir.is_dir() {
            return Err(AssetError::NotFound(dir.to_string_lossy().to_string()));
        }

        let mut frames: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_texture(path))
            .collect();
        frames.sort();

        Ok(frames)
    }
}

impl AnimationSource for AssetLoader {
    fn frames(&self, animation: &str) -> Result<Vec<SpriteFrame>, AssetError> {
        let paths = self.list_frames(animation)?;
        let mut frames = Vec::with_capacity(paths.len());

        for path in paths {
            let (width, height) = image::image_dimensions(&path)?;
            frames.push(SpriteFrame::new(
                TextureHandle::from_path(&path.to_string_lossy()),
                Vec2::new(width as f32, height as f32),
            ));
        }

        debug!("Loaded {} frames for '{}'", frames.len(), animation);
        Ok(frames)
    }
}

fn is_texture(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXTURE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
