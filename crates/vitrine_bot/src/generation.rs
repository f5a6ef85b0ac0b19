//! Prompt-shaping generator adapter.
//!
//! Wraps a raw [`TextCompletion`] driver and turns typed template lookups
//! into a deterministic, topic-substituted prompt with fixed generation
//! parameters. Exactly one provider call is issued per invocation.

use async_trait::async_trait;
use tracing::{debug, info};
use vitrine_core::{
    GenerateRequest, HEADLINE_PLACEHOLDER, PostKind, SERVICE_AREA_PLACEHOLDER,
    SERVICE_NAME_PLACEHOLDER, TemplateSet, Topic, substitute,
};
use vitrine_error::{
    GenerationError, GenerationErrorKind, TemplateError, TemplateErrorKind, VitrineResult,
};
use vitrine_interface::{ContentGenerator, TextCompletion};

const POST_MAX_TOKENS: u32 = 500;
const STORY_MAX_TOKENS: u32 = 100;
const SAMPLING_TEMPERATURE: f32 = 0.7;

/// Generator adapter that assembles prompts from the template set.
pub struct PromptedGenerator<D: TextCompletion> {
    driver: D,
    brand: String,
    template_name: String,
}

impl<D: TextCompletion> PromptedGenerator<D> {
    /// Creates an adapter around a completion driver.
    ///
    /// `brand` names the business the content is written for; `template_name`
    /// selects the content template used for both posts and stories.
    pub fn new(driver: D, brand: impl Into<String>, template_name: impl Into<String>) -> Self {
        Self {
            driver,
            brand: brand.into(),
            template_name: template_name.into(),
        }
    }

    fn post_prompt(&self, topic: &Topic, templates: &TemplateSet) -> VitrineResult<String> {
        let template = templates.content_template(&self.template_name).ok_or_else(|| {
            TemplateError::new(TemplateErrorKind::MissingTemplate(self.template_name.clone()))
        })?;
        let concept = templates.concept(topic.name()).ok_or_else(|| {
            TemplateError::new(TemplateErrorKind::MissingConcept(topic.name().to_string()))
        })?;

        let text = &template.content_text;
        let title = substitute(&text.title, SERVICE_NAME_PLACEHOLDER, &concept.name);
        let description = substitute(
            &substitute(&text.description, SERVICE_NAME_PLACEHOLDER, &concept.name),
            SERVICE_AREA_PLACEHOLDER,
            &concept.name,
        );
        let contact = substitute(&text.contact, SERVICE_AREA_PLACEHOLDER, &concept.name);

        Ok(format!(
            "Write a social media feed post for {brand} about the '{topic}' service.\n\
             The content must consist of these sections:\n\
             1. {title}\n\
             2. {description}\n\
             3. {faq}\n\
             4. One randomly chosen question and answer\n\
             5. {contact}\n\
             6. Five related hashtags\n\
             Keep the whole post under 2000 characters.",
            brand = self.brand,
            topic = topic.name(),
            title = title,
            description = description,
            faq = text.faq_title,
            contact = contact,
        ))
    }

    fn story_prompt(&self, topic: &Topic, templates: &TemplateSet) -> VitrineResult<String> {
        let template = templates.content_template(&self.template_name).ok_or_else(|| {
            TemplateError::new(TemplateErrorKind::MissingTemplate(self.template_name.clone()))
        })?;

        let story = &template.story_suggestion;
        let title = substitute(&story.title, HEADLINE_PLACEHOLDER, topic.name());
        let description = substitute(&story.description, SERVICE_NAME_PLACEHOLDER, topic.name());

        Ok(format!(
            "Write a short social media story caption for {brand} about the '{topic}' service.\n\
             The text must include:\n\
             1. {title}\n\
             2. {description}\n\
             3. Two or three related hashtags\n\
             Keep the whole text under 280 characters.",
            brand = self.brand,
            topic = topic.name(),
            title = title,
            description = description,
        ))
    }
}

#[async_trait]
impl<D: TextCompletion> ContentGenerator for PromptedGenerator<D> {
    async fn generate(
        &self,
        kind: PostKind,
        topic: &Topic,
        templates: &TemplateSet,
    ) -> VitrineResult<String> {
        let (prompt, max_tokens) = match kind {
            PostKind::Post => (self.post_prompt(topic, templates)?, POST_MAX_TOKENS),
            PostKind::Story => (self.story_prompt(topic, templates)?, STORY_MAX_TOKENS),
        };

        debug!(
            kind = %kind,
            topic = %topic.name(),
            provider = self.driver.provider_name(),
            "Requesting completion"
        );

        let request = GenerateRequest {
            prompt,
            max_tokens: Some(max_tokens),
            temperature: Some(SAMPLING_TEMPERATURE),
            candidates: 1,
        };

        let response = self.driver.complete(&request).await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Provider(e.to_string()))
        })?;

        let text = response.text.trim();
        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse))?;
        }

        info!(kind = %kind, topic = %topic.name(), chars = text.len(), "Generated content");
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{Concept, ContentTemplate, ContentText, GenerateResponse, StorySuggestion};

    struct FixedDriver(&'static str);

    #[async_trait]
    impl TextCompletion for FixedDriver {
        async fn complete(&self, _req: &GenerateRequest) -> VitrineResult<GenerateResponse> {
            Ok(GenerateResponse::new(self.0))
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    fn templates() -> TemplateSet {
        TemplateSet {
            content_templates: vec![ContentTemplate {
                name: "Service Content Template".to_string(),
                content_text: ContentText {
                    title: "Discover [Service Name]".to_string(),
                    description: "Learn why [Service Name] shines at our [Service Area] studio"
                        .to_string(),
                    faq_title: "Frequently Asked Questions".to_string(),
                    contact: "Book your [Service Area] appointment".to_string(),
                },
                story_suggestion: StorySuggestion {
                    title: "Today: [Headline]".to_string(),
                    description: "Ask us about [Service Name]".to_string(),
                },
            }],
            concepts: vec![Concept {
                name: "Laser Hair Removal".to_string(),
            }],
        }
    }

    fn adapter(text: &'static str) -> PromptedGenerator<FixedDriver> {
        PromptedGenerator::new(FixedDriver(text), "Glow Studio", "Service Content Template")
    }

    #[tokio::test]
    async fn test_post_prompt_substitutes_topic() {
        let r#gen = adapter("  a caption  ");
        let topic = Topic::new("Laser Hair Removal");
        let prompt = r#gen.post_prompt(&topic, &templates()).unwrap();
        assert!(prompt.contains("Discover Laser Hair Removal"));
        assert!(prompt.contains("Glow Studio"));
        assert!(!prompt.contains("[Service Name]"));
        assert!(!prompt.contains("[Service Area]"));
    }

    #[tokio::test]
    async fn test_generate_trims_response() {
        let r#gen = adapter("  a caption  ");
        let topic = Topic::new("Laser Hair Removal");
        let text = r#gen
            .generate(PostKind::Post, &topic, &templates())
            .await
            .unwrap();
        assert_eq!(text, "a caption");
    }

    #[tokio::test]
    async fn test_missing_concept_fails_post_but_not_story() {
        let r#gen = adapter("caption");
        let topic = Topic::new("Waxing");
        assert!(r#gen
            .generate(PostKind::Post, &topic, &templates())
            .await
            .is_err());
        assert!(r#gen
            .generate(PostKind::Story, &topic, &templates())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_empty_response_is_an_error() {
        let r#gen = adapter("   \n ");
        let topic = Topic::new("Laser Hair Removal");
        let err = r#gen
            .generate(PostKind::Post, &topic, &templates())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty response"));
    }
}
