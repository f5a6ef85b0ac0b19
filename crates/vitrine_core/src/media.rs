//! Resolved media references.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A resolved local path to an image associated with a topic.
///
/// The image catalog is static but the filesystem is not guaranteed stable,
/// so existence must be re-verified at use time via [`MediaReference::exists`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    /// Normalized topic key the media was resolved for
    pub topic_key: String,
    /// Local filesystem path to the image
    pub path: PathBuf,
}

impl MediaReference {
    /// Creates a media reference for a topic key.
    pub fn new(topic_key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            topic_key: topic_key.into(),
            path: path.into(),
        }
    }

    /// Re-checks that the referenced file still exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Borrow the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
