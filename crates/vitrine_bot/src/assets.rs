//! Filesystem-backed media asset resolution.

use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;
use vitrine_error::{AssetError, AssetErrorKind, VitrineResult};
use vitrine_interface::AssetResolver;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Resolves topic keys to images in per-topic directories.
///
/// The key-to-directory mapping comes from configuration; directory contents
/// are listed on every call so a file deleted between resolution and
/// publication is caught by the re-check rather than cached away.
#[derive(Debug, Clone)]
pub struct DirectoryAssetResolver {
    image_dirs: HashMap<String, PathBuf>,
}

impl DirectoryAssetResolver {
    /// Creates a resolver from a topic-key to directory mapping.
    pub fn new(image_dirs: HashMap<String, PathBuf>) -> Self {
        Self { image_dirs }
    }

    fn is_image(path: &PathBuf) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false)
    }
}

impl AssetResolver for DirectoryAssetResolver {
    fn resolve_media(&self, topic_key: &str) -> VitrineResult<PathBuf> {
        let dir = self
            .image_dirs
            .get(topic_key)
            .filter(|dir| dir.is_dir())
            .ok_or_else(|| {
                AssetError::new(AssetErrorKind::MissingDirectory(topic_key.to_string()))
            })?;

        let entries = std::fs::read_dir(dir).map_err(|e| {
            AssetError::new(AssetErrorKind::Unreadable {
                key: topic_key.to_string(),
                message: e.to_string(),
            })
        })?;

        let images: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(Self::is_image)
            .collect();

        let mut rng = rand::thread_rng();
        let path = images
            .choose(&mut rng)
            .cloned()
            .ok_or_else(|| AssetError::new(AssetErrorKind::NoImages(topic_key.to_string())))?;

        debug!(topic_key, path = %path.display(), "Resolved media");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_for(dir: &tempfile::TempDir, key: &str) -> DirectoryAssetResolver {
        let mut dirs = HashMap::new();
        dirs.insert(key.to_string(), dir.path().to_path_buf());
        DirectoryAssetResolver::new(dirs)
    }

    #[test]
    fn test_unmapped_key_is_missing_directory() {
        let resolver = DirectoryAssetResolver::new(HashMap::new());
        let err = resolver.resolve_media("massage").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_empty_directory_has_no_images() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver_for(&dir, "massage");
        let err = resolver.resolve_media("massage").unwrap_err();
        assert!(err.to_string().contains("No images"));
    }

    #[test]
    fn test_non_image_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        let resolver = resolver_for(&dir, "massage");
        assert!(resolver.resolve_media("massage").is_err());
    }

    #[test]
    fn test_resolves_an_image_with_case_insensitive_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("promo.JPG"), b"x").unwrap();
        let resolver = resolver_for(&dir, "massage");
        let path = resolver.resolve_media("massage").unwrap();
        assert!(path.exists());
    }
}
