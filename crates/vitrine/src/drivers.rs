//! Built-in rehearsal collaborators.
//!
//! Real deployments plug provider-backed implementations into the trait
//! seams. These two let operators exercise the whole pipeline offline: the
//! template driver renders content directly from the template set without a
//! generation provider, and the console publisher logs what would have been
//! uploaded instead of touching the network.

use async_trait::async_trait;
use std::path::Path;
use tracing::info;
use vitrine_core::{
    HEADLINE_PLACEHOLDER, PostKind, SERVICE_AREA_PLACEHOLDER, SERVICE_NAME_PLACEHOLDER,
    TemplateSet, Topic, substitute,
};
use vitrine_error::{TemplateError, TemplateErrorKind, VitrineResult};
use vitrine_interface::{ContentGenerator, Publisher};

/// Offline generator that renders the template sections directly.
///
/// Produces deterministic content mentioning the topic by name with an
/// expressive closing line, so rehearsal posts pass the validation gate
/// whenever the templates themselves mention the service.
pub struct TemplateDriver {
    brand: String,
    template_name: String,
}

impl TemplateDriver {
    /// Creates a driver for the given brand and content template.
    pub fn new(brand: impl Into<String>, template_name: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            template_name: template_name.into(),
        }
    }

    fn hashtags(topic: &Topic) -> String {
        let compact: String = topic
            .name()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        format!("#{} #beauty #selfcare #booknow #wellness", compact)
    }
}

#[async_trait]
impl ContentGenerator for TemplateDriver {
    async fn generate(
        &self,
        kind: PostKind,
        topic: &Topic,
        templates: &TemplateSet,
    ) -> VitrineResult<String> {
        let template = templates.content_template(&self.template_name).ok_or_else(|| {
            TemplateError::new(TemplateErrorKind::MissingTemplate(self.template_name.clone()))
        })?;

        let text = match kind {
            PostKind::Post => {
                let concept = templates.concept(topic.name()).ok_or_else(|| {
                    TemplateError::new(TemplateErrorKind::MissingConcept(
                        topic.name().to_string(),
                    ))
                })?;
                let sections = &template.content_text;
                format!(
                    "{title}\n\n{description}\n\n{faq}\n\n{contact}\n\n\
                     Visit {brand} and treat yourself ✨\n{hashtags}",
                    title = substitute(&sections.title, SERVICE_NAME_PLACEHOLDER, &concept.name),
                    description = substitute(
                        &substitute(&sections.description, SERVICE_NAME_PLACEHOLDER, &concept.name),
                        SERVICE_AREA_PLACEHOLDER,
                        &concept.name,
                    ),
                    faq = sections.faq_title,
                    contact = substitute(&sections.contact, SERVICE_AREA_PLACEHOLDER, &concept.name),
                    brand = self.brand,
                    hashtags = Self::hashtags(topic),
                )
            }
            PostKind::Story => {
                let story = &template.story_suggestion;
                format!(
                    "{title}\n{description} ✨\n#{key}",
                    title = substitute(&story.title, HEADLINE_PLACEHOLDER, topic.name()),
                    description =
                        substitute(&story.description, SERVICE_NAME_PLACEHOLDER, topic.name()),
                    key = topic.key(),
                )
            }
        };

        Ok(text)
    }
}

/// Publisher that logs instead of uploading.
#[derive(Debug, Default, Clone)]
pub struct ConsolePublisher;

#[async_trait]
impl Publisher for ConsolePublisher {
    async fn publish_post(&self, media_path: &Path, text: &str) -> VitrineResult<()> {
        info!(
            media = %media_path.display(),
            chars = text.chars().count(),
            "Rehearsal: would publish feed post\n{}",
            text
        );
        Ok(())
    }

    async fn publish_story(&self, media_path: &Path) -> VitrineResult<()> {
        info!(media = %media_path.display(), "Rehearsal: would publish story");
        Ok(())
    }
}
