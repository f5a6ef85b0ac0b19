//! Media asset resolution error types.

/// Specific error conditions for media asset resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AssetErrorKind {
    /// No image directory is mapped for the topic key, or the mapped
    /// directory does not exist on disk
    #[display("Image directory missing for topic key '{}'", _0)]
    MissingDirectory(String),
    /// The mapped directory exists but contains no usable images
    #[display("No images found for topic key '{}'", _0)]
    NoImages(String),
    /// The directory could not be read
    #[display("Failed to read image directory for '{}': {}", key, message)]
    Unreadable {
        /// Topic key whose directory failed to read
        key: String,
        /// Underlying I/O error message
        message: String,
    },
}

/// Error type for media asset resolution.
///
/// Recoverable: the current publication cycle is skipped and the next tick
/// starts fresh.
///
/// # Examples
///
/// ```
/// use vitrine_error::{AssetError, AssetErrorKind};
///
/// let err = AssetError::new(AssetErrorKind::NoImages("laser-hair-removal".into()));
/// assert!(format!("{}", err).contains("laser-hair-removal"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Asset Error: {} at line {} in {}", kind, line, file)]
pub struct AssetError {
    /// The specific error condition
    pub kind: AssetErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AssetError {
    /// Create a new AssetError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
