//! Trait definitions for the scheduler's external collaborators.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use vitrine_core::{GenerateRequest, GenerateResponse, PostKind, TemplateSet, Topic};
use vitrine_error::VitrineResult;

/// Low-level text-completion driver for a generation provider.
///
/// This is the single billable, rate-limited action in the system; callers
/// must issue exactly one call per generation attempt. The implementor owns
/// provider authentication and request shaping.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Generate a single text completion for the given request.
    async fn complete(&self, req: &GenerateRequest) -> VitrineResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "gemini", "template").
    fn provider_name(&self) -> &'static str;
}

/// The content generation boundary consumed by the scheduler.
///
/// Given a publication kind, a topic, and the template set, produce the
/// trimmed artifact text or fail with a recoverable generation error.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate content of the given kind for a topic.
    async fn generate(
        &self,
        kind: PostKind,
        topic: &Topic,
        templates: &TemplateSet,
    ) -> VitrineResult<String>;
}

/// Resolves a topic key to a local media file.
///
/// Implementations must re-check filesystem existence at call time rather
/// than caching results; the catalog is static but the filesystem is not.
pub trait AssetResolver: Send + Sync {
    /// Resolve the topic key to an existing image path.
    fn resolve_media(&self, topic_key: &str) -> VitrineResult<PathBuf>;
}

/// Publishes content to the social platform.
///
/// Each publish call is a single atomic external action; the implementor owns
/// session establishment and authentication.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a feed post with a caption.
    async fn publish_post(&self, media_path: &Path, text: &str) -> VitrineResult<()>;

    /// Publish a story (media only, no caption).
    async fn publish_story(&self, media_path: &Path) -> VitrineResult<()>;
}
