//! Core data types for the Vitrine publication scheduler.
//!
//! This crate provides the foundation data types shared by the scheduler,
//! the generator adapter, and the collaborator trait seams.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod media;
mod request;
mod template;
mod topic;

pub use artifact::{Artifact, PostKind};
pub use media::MediaReference;
pub use request::{GenerateRequest, GenerateResponse};
pub use template::{
    Concept, ContentTemplate, ContentText, HEADLINE_PLACEHOLDER, SERVICE_AREA_PLACEHOLDER,
    SERVICE_NAME_PLACEHOLDER, StorySuggestion, TemplateSet, substitute,
};
pub use topic::Topic;
