//! Generated content artifacts.

use crate::Topic;
use serde::{Deserialize, Serialize};

/// The two independently scheduled publication kinds.
///
/// # Examples
///
/// ```
/// use vitrine_core::PostKind;
///
/// assert_eq!(format!("{}", PostKind::Post), "Post");
/// assert_ne!(PostKind::Post, PostKind::Story);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum PostKind {
    /// Permanent feed post with a caption
    Post,
    /// Short-lived story
    Story,
}

/// A block of generated text for a specific publication kind.
///
/// Artifacts are consumed immediately by the validation gate and publisher;
/// they are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Publication kind this text was generated for
    pub kind: PostKind,
    /// Topic the text was generated about
    pub topic: Topic,
    /// Trimmed generated text
    pub text: String,
}

impl Artifact {
    /// Creates an artifact, trimming surrounding whitespace from the text.
    pub fn new(kind: PostKind, topic: Topic, text: impl Into<String>) -> Self {
        Self {
            kind,
            topic,
            text: text.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_trims_text() {
        let artifact = Artifact::new(PostKind::Post, Topic::new("Massage"), "  hello  \n");
        assert_eq!(artifact.text, "hello");
    }
}
