// Character animation: per-status frame sequences and a looping cursor

use super::state::Status;
use crate::engine::assets::{AnimationSource, AssetError, SpriteFrame};
use log::debug;

/// Frames of one status, played in order and looped
#[derive(Debug, Clone)]
pub struct AnimationClip {
    frames: Vec<SpriteFrame>,
}

impl AnimationClip {
    /// `None` for an empty sequence
    pub fn new(frames: Vec<SpriteFrame>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Frame at `index`, wrapped into range
    pub fn frame(&self, index: usize) -> SpriteFrame {
        self.frames[index % self.frames.len()]
    }
}

/// One clip for every player status.
///
/// Loading checks that every status has at least one frame, so a lookup
/// during play can never miss.
#[derive(Debug, Clone)]
pub struct AnimationLibrary {
    /// Indexed by `Status::index()`
    clips: Vec<AnimationClip>,
}

impl AnimationLibrary {
    /// Pull every status's frames from `source`
    pub fn load(source: &dyn AnimationSource) -> Result<Self, AssetError> {
        let mut clips = Vec::with_capacity(Status::COUNT);

        for status in Status::all() {
            let key = status.key();
            let frames = match source.frames(&key) {
                Ok(frames) => frames,
                Err(AssetError::NotFound(_)) => return Err(AssetError::MissingAnimation(key)),
                Err(err) => return Err(err),
            };
            let clip = AnimationClip::new(frames).ok_or_else(|| AssetError::EmptyAnimation(key.clone()))?;
            debug!("Animation '{}': {} frames", key, clip.len());
            clips.push(clip);
        }

        Ok(Self { clips })
    }

    pub fn clip(&self, status: Status) -> &AnimationClip {
        &self.clips[status.index()]
    }
}

/// Fractional frame position that advances a fixed amount per update
#[derive(Debug, Clone, Copy)]
pub struct FrameCursor {
    position: f32,
    speed: f32,
}

impl FrameCursor {
    pub fn new(speed: f32) -> Self {
        Self {
            position: 0.0,
            speed: speed.max(0.0),
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Step forward through a clip of `frame_count` frames, restarting at 0
    /// past the end, and return the frame to show
    pub fn advance(&mut self, frame_count: usize) -> usize {
        self.position += self.speed;
        if self.position >= frame_count as f32 {
            self.position = 0.0;
        }
        self.position as usize
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
    }
}
