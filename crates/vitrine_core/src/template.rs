//! Content template catalog.
//!
//! Templates ship as a JSON document with named content templates and a list
//! of concepts (one per promotable service). Prompt assembly substitutes the
//! placeholder tokens `[Service Name]`, `[Service Area]`, and `[Headline]`
//! with topic-specific values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vitrine_error::{ConfigError, VitrineResult};

/// Placeholder replaced by the topic's display name.
pub const SERVICE_NAME_PLACEHOLDER: &str = "[Service Name]";
/// Placeholder replaced by the service area (same as the topic name here).
pub const SERVICE_AREA_PLACEHOLDER: &str = "[Service Area]";
/// Placeholder replaced by the story headline text.
pub const HEADLINE_PLACEHOLDER: &str = "[Headline]";

/// The full template catalog supplied to the scheduler at startup.
///
/// # Examples
///
/// ```
/// use vitrine_core::TemplateSet;
///
/// let json = r#"{
///     "contentTemplates": [],
///     "concepts": [{"name": "Massage"}]
/// }"#;
/// let set: TemplateSet = serde_json::from_str(json).unwrap();
/// assert!(set.concept("massage").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    /// Named content templates
    pub content_templates: Vec<ContentTemplate>,
    /// Per-service concept entries
    pub concepts: Vec<Concept>,
}

impl TemplateSet {
    /// Load a template set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read template file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse template file: {}", e)).into())
    }

    /// Look up a content template by exact name.
    pub fn content_template(&self, name: &str) -> Option<&ContentTemplate> {
        self.content_templates.iter().find(|t| t.name == name)
    }

    /// Look up a concept by name, case-insensitively.
    pub fn concept(&self, name: &str) -> Option<&Concept> {
        self.concepts
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// A named content template with post and story sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTemplate {
    /// Template name used for lookup
    pub name: String,
    /// Sections for feed post prompts
    pub content_text: ContentText,
    /// Sections for story prompts
    pub story_suggestion: StorySuggestion,
}

/// Feed post template sections with placeholder substitution points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentText {
    /// Post title line
    pub title: String,
    /// Post body description
    pub description: String,
    /// Header introducing the FAQ section
    pub faq_title: String,
    /// Closing contact line
    pub contact: String,
}

/// Story template sections with placeholder substitution points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySuggestion {
    /// Story headline
    pub title: String,
    /// Story body description
    pub description: String,
}

/// A promotable service entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Service name as promoted to customers
    pub name: String,
}

/// Substitute a placeholder token everywhere it appears in a template string.
pub fn substitute(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> TemplateSet {
        TemplateSet {
            content_templates: vec![ContentTemplate {
                name: "Service Content Template".to_string(),
                content_text: ContentText {
                    title: "Discover [Service Name]".to_string(),
                    description: "All about [Service Name] in our [Service Area] studio"
                        .to_string(),
                    faq_title: "Frequently Asked Questions".to_string(),
                    contact: "Book your [Service Area] session today".to_string(),
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

    #[test]
    fn test_template_lookup_is_exact() {
        let set = sample_set();
        assert!(set.content_template("Service Content Template").is_some());
        assert!(set.content_template("service content template").is_none());
    }

    #[test]
    fn test_concept_lookup_is_case_insensitive() {
        let set = sample_set();
        assert!(set.concept("laser hair removal").is_some());
        assert!(set.concept("LASER HAIR REMOVAL").is_some());
        assert!(set.concept("waxing").is_none());
    }

    #[test]
    fn test_substitution_replaces_all_occurrences() {
        let out = substitute(
            "Try [Service Name], because [Service Name] works",
            SERVICE_NAME_PLACEHOLDER,
            "Massage",
        );
        assert_eq!(out, "Try Massage, because Massage works");
    }

    #[test]
    fn test_camel_case_json_round_trip() {
        let set = sample_set();
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("contentTemplates"));
        assert!(json.contains("faqTitle"));
        let back: TemplateSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
