//! Error types for the Vitrine publication scheduler.
//!
//! This crate provides the foundation error types used throughout the Vitrine
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vitrine_error::{VitrineResult, ConfigError};
//!
//! fn load_settings() -> VitrineResult<String> {
//!     Err(ConfigError::new("Missing template path"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod catalog;
mod config;
mod error;
mod generation;
mod publish;
mod template;
mod validation;

pub use asset::{AssetError, AssetErrorKind};
pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{VitrineError, VitrineErrorKind, VitrineResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use publish::{PublishError, PublishErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
