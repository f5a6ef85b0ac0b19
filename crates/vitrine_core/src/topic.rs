//! Topic types for content selection.

use serde::{Deserialize, Serialize};

/// A selectable subject driving both content generation and media lookup.
///
/// The `key` is derived from the display name (lowercase, spaces replaced by
/// hyphens) and is used to look up the topic's image directory. Topics are
/// immutable once selected and are regenerated on each draw.
///
/// # Examples
///
/// ```
/// use vitrine_core::Topic;
///
/// let topic = Topic::new("Laser Hair Removal");
/// assert_eq!(topic.name(), "Laser Hair Removal");
/// assert_eq!(topic.key(), "laser-hair-removal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    name: String,
    key: String,
}

impl Topic {
    /// Creates a topic from its display name, deriving the normalized key.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = name.to_lowercase().replace(' ', "-");
        Self { name, key }
    }

    /// Display name as it appears in the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized lookup key (lowercase, space-to-hyphen).
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalization() {
        let topic = Topic::new("Skin Care Consultation");
        assert_eq!(topic.key(), "skin-care-consultation");
    }

    #[test]
    fn test_single_word_key() {
        let topic = Topic::new("Massage");
        assert_eq!(topic.key(), "massage");
    }
}
