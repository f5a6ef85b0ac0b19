//! Pre-publication validation gate.
//!
//! Two cheap, pure heuristics gate every feed post. They are deliberately
//! permissive: the coherence check is a proxy that the text is actually about
//! the selected topic and that the referenced asset is real, and the
//! naturalness check is a crude anti-robotic filter, not a content-quality
//! classifier. Stories skip both and only require the media to exist.

use std::path::Path;
use tracing::warn;
use vitrine_core::Topic;

/// Minimum character count for the naturalness check (exclusive).
pub const MIN_NATURAL_CHARS: usize = 100;

/// Expressive symbols, at least one of which must appear in natural text.
pub const EXPRESSIVE_SYMBOLS: [&str; 4] = ["😊", "👍", "💖", "✨"];

/// Passes iff the topic's display name appears in the text
/// (case-insensitively) and the media path exists at check time.
pub fn coherence_check(topic: &Topic, text: &str, media_path: &Path) -> bool {
    let mentions_topic = text
        .to_lowercase()
        .contains(&topic.name().to_lowercase());

    if !mentions_topic {
        warn!(topic = %topic.name(), "Generated text does not mention the topic");
        return false;
    }
    if !media_path.exists() {
        warn!(path = %media_path.display(), "Media path vanished before publication");
        return false;
    }
    true
}

/// Passes iff the text exceeds [`MIN_NATURAL_CHARS`] characters and contains
/// at least one expressive symbol.
pub fn naturalness_check(text: &str) -> bool {
    text.chars().count() > MIN_NATURAL_CHARS
        && EXPRESSIVE_SYMBOLS.iter().any(|symbol| text.contains(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coherence_requires_topic_mention() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("promo.jpg");
        std::fs::write(&image, b"x").unwrap();

        let topic = Topic::new("Laser Hair Removal");
        assert!(coherence_check(
            &topic,
            "Try our LASER HAIR REMOVAL package",
            &image
        ));
        assert!(!coherence_check(&topic, "Try our waxing package", &image));
    }

    #[test]
    fn test_coherence_requires_existing_media() {
        let topic = Topic::new("Massage");
        let missing = Path::new("/nonexistent/massage.jpg");
        assert!(!coherence_check(&topic, "Relaxing massage offer", missing));
    }

    #[test]
    fn test_naturalness_boundary_at_one_hundred_chars() {
        // Exactly 100 characters including the symbol: too short.
        let exactly_100 = format!("{}✨", "a".repeat(99));
        assert_eq!(exactly_100.chars().count(), 100);
        assert!(!naturalness_check(&exactly_100));

        // 101 characters with a symbol: passes.
        let just_over = format!("{}✨", "a".repeat(100));
        assert_eq!(just_over.chars().count(), 101);
        assert!(naturalness_check(&just_over));
    }

    #[test]
    fn test_naturalness_requires_expressive_symbol() {
        let long_but_flat = "a".repeat(200);
        assert!(!naturalness_check(&long_but_flat));

        for symbol in EXPRESSIVE_SYMBOLS {
            let text = format!("{}{}", "a".repeat(150), symbol);
            assert!(naturalness_check(&text));
        }
    }
}
