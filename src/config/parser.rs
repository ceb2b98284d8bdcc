use std::path::Path;

use super::types::GuardConfig;
use crate::errors::GuardError;

/// Load configuration from an optional YAML file, then fill any unset
/// API keys from the environment. File values win over the environment.
pub async fn load_config(path: Option<&Path>) -> Result<GuardConfig, GuardError> {
    let mut config = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GuardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            let content = tokio::fs::read_to_string(p).await?;
            serde_yaml::from_str(&content)?
        }
        None => GuardConfig::default(),
    };

    if config.gemini_api_key.is_none() {
        config.gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
    }
    if config.safe_browsing_api_key.is_none() {
        config.safe_browsing_api_key = std::env::var("SAFE_BROWSING_API_KEY").ok();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gemini_api_key: test-gemini-key").unwrap();
        writeln!(file, "safe_browsing_api_key: test-sb-key").unwrap();
        writeln!(file, "model: gemini-2.0-flash").unwrap();
        writeln!(file, "request_timeout_secs: 5").unwrap();

        let config = load_config(Some(file.path())).await.unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("test-gemini-key"));
        assert_eq!(config.safe_browsing_api_key.as_deref(), Some("test-sb-key"));
        assert_eq!(config.model(), "gemini-2.0-flash");
        assert_eq!(config.request_timeout_secs, Some(5));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/guard.yaml"))).await;
        assert!(matches!(result, Err(GuardError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gemini_api_key: [unclosed").unwrap();

        let result = load_config(Some(file.path())).await;
        assert!(matches!(result, Err(GuardError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gemini_api_key: only-this").unwrap();

        let config = load_config(Some(file.path())).await.unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("only-this"));
        assert!(config.model.is_none());
        assert!(config.request_timeout_secs.is_none());
    }
}
