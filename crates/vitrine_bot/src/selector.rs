//! Random topic selection.

use rand::seq::SliceRandom;
use tracing::debug;
use vitrine_core::Topic;
use vitrine_error::{CatalogError, CatalogErrorKind, VitrineResult};

/// Picks a random topic from a fixed catalog.
///
/// The catalog is validated once at construction; selection itself is
/// infallible and uniform.
///
/// # Examples
///
/// ```
/// use vitrine_bot::TopicSelector;
///
/// let selector = TopicSelector::new(vec!["Massage".to_string()]).unwrap();
/// assert_eq!(selector.select().name(), "Massage");
/// ```
#[derive(Debug, Clone)]
pub struct TopicSelector {
    topics: Vec<String>,
}

impl TopicSelector {
    /// Creates a selector, rejecting an empty catalog.
    pub fn new(topics: Vec<String>) -> VitrineResult<Self> {
        if topics.is_empty() {
            return Err(CatalogError::new(CatalogErrorKind::Empty))?;
        }
        Ok(Self { topics })
    }

    /// Draws a topic uniformly at random.
    pub fn select(&self) -> Topic {
        let mut rng = rand::thread_rng();
        // Catalog is non-empty by construction, so choose cannot fail.
        let name = self.topics.choose(&mut rng).cloned().unwrap_or_default();
        let topic = Topic::new(name);
        debug!(topic = %topic.name(), key = %topic.key(), "Selected random topic");
        topic
    }

    /// Number of topics in the catalog.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the catalog is empty (never true for a constructed selector).
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(TopicSelector::new(vec![]).is_err());
    }

    #[test]
    fn test_selection_stays_in_catalog() {
        let topics = vec![
            "Massage".to_string(),
            "Skin Care".to_string(),
            "Laser Hair Removal".to_string(),
        ];
        let selector = TopicSelector::new(topics.clone()).unwrap();

        for _ in 0..50 {
            let topic = selector.select();
            assert!(topics.iter().any(|t| t == topic.name()));
        }
    }

    #[test]
    fn test_selected_topic_has_normalized_key() {
        let selector = TopicSelector::new(vec!["Laser Hair Removal".to_string()]).unwrap();
        assert_eq!(selector.select().key(), "laser-hair-removal");
    }
}
