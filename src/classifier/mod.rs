pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

use crate::errors::GuardError;

pub use gemini::GeminiClassifier;

/// What the caller submitted, forwarded to the classifier untouched.
#[derive(Debug, Clone, Default)]
pub struct ScanInput {
    /// URL or free text.
    pub text: Option<String>,
    /// Base64-encoded PNG screenshot.
    pub image_data: Option<String>,
}

impl ScanInput {
    /// Text worth sending to the reputation oracle. Empty strings are
    /// treated as absent; anything else qualifies, URL-shaped or not.
    pub fn url_candidate(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Base64 payload, empty strings treated as absent.
    pub fn image_payload(&self) -> Option<&str> {
        self.image_data.as_deref().filter(|d| !d.is_empty())
    }
}

/// External generative service producing a structured risk judgment for
/// the given content. Returns the model's raw text output; parsing it
/// against the contract is the aggregator's job.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, input: &ScanInput) -> Result<String, GuardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_candidate_skips_empty_text() {
        let input = ScanInput {
            text: Some(String::new()),
            image_data: None,
        };
        assert!(input.url_candidate().is_none());
    }

    #[test]
    fn test_url_candidate_accepts_non_url_text() {
        let input = ScanInput {
            text: Some("congratulations, you won a prize".to_string()),
            image_data: None,
        };
        assert_eq!(
            input.url_candidate(),
            Some("congratulations, you won a prize")
        );
    }

    #[test]
    fn test_image_payload_skips_empty_data() {
        let input = ScanInput {
            text: None,
            image_data: Some(String::new()),
        };
        assert!(input.image_payload().is_none());
    }
}
