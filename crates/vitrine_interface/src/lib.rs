//! Collaborator trait seams for the Vitrine publication scheduler.
//!
//! The scheduler orchestrates three external collaborators: a content
//! generator, a media asset resolver, and a publisher. Each is modeled as a
//! trait so deployments can plug in real providers while tests use stubs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{AssetResolver, ContentGenerator, Publisher, TextCompletion};
