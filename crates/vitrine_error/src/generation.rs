//! Content generation error types.

/// Specific error conditions for content generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The generation provider returned an error
    #[display("Generation provider error: {}", _0)]
    Provider(String),
    /// The provider returned an empty or whitespace-only response
    #[display("Generation provider returned an empty response")]
    EmptyResponse,
    /// The acquisition loop exhausted its attempt budget
    #[display("Content acquisition exhausted after {} attempts", attempts)]
    Exhausted {
        /// Number of attempts made before giving up
        attempts: u32,
    },
}

/// Error type for content generation.
///
/// `Provider` and `EmptyResponse` are recoverable within the acquisition loop
/// (a fresh topic is drawn); `Exhausted` aborts the current cycle and leaves
/// the schedule untouched.
///
/// # Examples
///
/// ```
/// use vitrine_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Exhausted { attempts: 8 });
/// assert!(format!("{}", err).contains("8 attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
