//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// A single text-completion request to a generation provider.
///
/// The prompt adapter fills these with fixed, deterministic parameters so
/// every provider call is bounded and yields a single candidate.
///
/// # Examples
///
/// ```
/// use vitrine_core::GenerateRequest;
///
/// let request = GenerateRequest {
///     prompt: "Write a caption".to_string(),
///     max_tokens: Some(500),
///     temperature: Some(0.7),
///     candidates: 1,
/// };
/// assert_eq!(request.candidates, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The fully assembled prompt text
    pub prompt: String,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Number of candidates requested (always 1 in this system)
    pub candidates: u32,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            max_tokens: None,
            temperature: None,
            candidates: 1,
        }
    }
}

/// The provider's response to a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text, untrimmed
    pub text: String,
}

impl GenerateResponse {
    /// Creates a response wrapping generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
