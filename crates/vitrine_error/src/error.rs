//! Top-level error wrapper types.

use crate::{
    AssetError, CatalogError, ConfigError, GenerationError, PublishError, TemplateError,
    ValidationError,
};

/// This is the foundation error enum. Each variant wraps one of the
/// per-concern error types defined in this crate.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineError, ConfigError};
///
/// let cfg_err = ConfigError::new("bad interval");
/// let err: VitrineError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VitrineErrorKind {
    /// Topic catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Template lookup error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Content generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Media asset resolution error
    #[from(AssetError)]
    Asset(AssetError),
    /// Validation gate error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Publication error
    #[from(PublishError)]
    Publish(PublishError),
}

/// Vitrine error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineResult, ConfigError};
///
/// fn might_fail() -> VitrineResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vitrine Error: {}", _0)]
pub struct VitrineError(Box<VitrineErrorKind>);

impl VitrineError {
    /// Create a new error from a kind.
    pub fn new(kind: VitrineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VitrineErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VitrineErrorKind
impl<T> From<T> for VitrineError
where
    T: Into<VitrineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineResult, ConfigError};
///
/// fn load() -> VitrineResult<String> {
///     Err(ConfigError::new("template path not set"))?
/// }
/// ```
pub type VitrineResult<T> = std::result::Result<T, VitrineError>;
