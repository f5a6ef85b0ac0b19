//! Publication error types.

/// Specific error conditions for publication attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// Feed post upload failed
    #[display("Post publication failed: {}", _0)]
    Post(String),
    /// Story upload failed
    #[display("Story publication failed: {}", _0)]
    Story(String),
}

/// Error type for publication attempts.
///
/// Recoverable: the schedule timestamp is left unchanged, so the same kind is
/// retried on the very next tick instead of waiting out a full interval.
///
/// # Examples
///
/// ```
/// use vitrine_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::Post("rate limited".into()));
/// assert!(format!("{}", err).contains("rate limited"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The specific error condition
    pub kind: PublishErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
