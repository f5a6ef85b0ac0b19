//! Content validation error types.

/// Specific error conditions for the pre-publication validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Generated text does not mention the topic, or the media path is stale
    #[display("Content does not match topic '{}' or its media", _0)]
    Incoherent(String),
    /// Generated text failed the naturalness heuristic
    #[display("Content failed naturalness check ({} chars)", length)]
    Unnatural {
        /// Character count of the rejected text
        length: usize,
    },
}

/// Error type for the validation gate.
///
/// Recoverable: the attempt is abandoned without retrying the same artifact;
/// the next tick regenerates from a fresh topic.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
