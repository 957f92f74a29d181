// Type-safe asset handle system

use std::marker::PhantomData;

/// Unique identifier for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Create a new asset ID from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Type-safe handle to an asset owned by the presentation layer
///
/// The `T` parameter ensures handles can only be used with the correct asset type.
#[derive(Debug)]
pub struct AssetHandle<T> {
    pub(crate) id: AssetId,
    _phantom: PhantomData<T>,
}

// Manual impls: derives would require `T` itself to be Copy/Eq
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for AssetHandle<T> {}

impl<T> AssetHandle<T> {
    pub(crate) fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Handle for the asset stored at `path`
    pub fn from_path(path: &str) -> Self {
        Self::new(AssetId::from_path(path))
    }

    /// Get the underlying asset ID
    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Marker type for textures
#[derive(Debug)]
pub struct TextureAsset;

pub type TextureHandle = AssetHandle<TextureAsset>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_from_path() {
        let id1 = AssetId::from_path("player/down_idle/0.png");
        let id2 = AssetId::from_path("player/down_idle/0.png");
        let id3 = AssetId::from_path("player/up_idle/0.png");

        assert_eq!(id1, id2, "Same paths should produce same IDs");
        assert_ne!(id1, id3, "Different paths should produce different IDs");
    }

    #[test]
    fn test_texture_handles_compare_by_id() {
        let a = TextureHandle::from_path("rock.png");
        let b = TextureHandle::from_path("rock.png");
        assert_eq!(a, b);
        assert_eq!(a.id().as_u64(), b.id().as_u64());
        assert_ne!(a, TextureHandle::from_path("grass.png"));
    }
}
