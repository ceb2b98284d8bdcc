use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classifier::gemini::DEFAULT_MODEL;
use crate::errors::GuardError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Startup configuration. API keys are passed explicitly into the
/// outbound clients at construction, never read from ambient globals at
/// call time.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GuardConfig {
    pub gemini_api_key: Option<String>,
    pub safe_browsing_api_key: Option<String>,
    /// Gemini model identifier.
    pub model: Option<String>,
    /// Per-call timeout for both outbound dependencies.
    pub request_timeout_secs: Option<u64>,
}

impl GuardConfig {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn gemini_api_key(&self) -> Result<&str, GuardError> {
        self.gemini_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GuardError::Config(
                    "Gemini API key not set (GEMINI_API_KEY env var or config file)".to_string(),
                )
            })
    }

    pub fn safe_browsing_api_key(&self) -> Result<&str, GuardError> {
        self.safe_browsing_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GuardError::Config(
                    "Safe Browsing API key not set (SAFE_BROWSING_API_KEY env var or config file)"
                        .to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_keys_error_with_hint() {
        let config = GuardConfig::default();
        let err = config.gemini_api_key().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        let err = config.safe_browsing_api_key().unwrap_err();
        assert!(err.to_string().contains("SAFE_BROWSING_API_KEY"));
    }

    #[test]
    fn test_empty_key_treated_as_missing() {
        let config = GuardConfig {
            gemini_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.gemini_api_key().is_err());
    }

    #[test]
    fn test_explicit_values_win() {
        let config = GuardConfig {
            gemini_api_key: Some("key-a".to_string()),
            model: Some("gemini-2.0-flash".to_string()),
            request_timeout_secs: Some(3),
            ..Default::default()
        };
        assert_eq!(config.gemini_api_key().unwrap(), "key-a");
        assert_eq!(config.model(), "gemini-2.0-flash");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }
}
