//! Template lookup error types.

/// Specific error conditions for template set lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Named content template does not exist in the template set
    #[display("Content template '{}' not found in template set", _0)]
    MissingTemplate(String),
    /// No concept entry matches the selected topic
    #[display("No concept entry for topic '{}'", _0)]
    MissingConcept(String),
}

/// Error type for template set lookups.
///
/// Recoverable: the acquisition loop reselects a topic and tries again.
///
/// # Examples
///
/// ```
/// use vitrine_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::MissingConcept("waxing".into()));
/// assert!(format!("{}", err).contains("waxing"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
