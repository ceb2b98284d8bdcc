use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::prompt::SYSTEM_PROMPT;
use super::{Classifier, ScanInput};
use crate::errors::GuardError;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Gemini generateContent client. One user turn carrying the supplied
/// image and/or text parts, with the output contract as the system
/// instruction.
pub struct GeminiClassifier {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClassifier {
    pub fn new(api_key: &str, model: Option<&str>, timeout: Duration) -> Result<Self, GuardError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GuardError::Config(format!("HTTP client build failed: {}", e)))?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Classifier for GeminiClassifier {
    async fn classify(&self, input: &ScanInput) -> Result<String, GuardError> {
        let mut parts = Vec::new();
        if let Some(image) = input.image_payload() {
            parts.push(json!({
                "inline_data": {
                    "mime_type": "image/png",
                    "data": image,
                }
            }));
        }
        if let Some(text) = input.url_candidate() {
            parts.push(json!({ "text": text }));
        }

        let body = json!({
            "contents": [{ "role": "user", "parts": parts }],
            "system_instruction": {
                "role": "system",
                "parts": [{ "text": SYSTEM_PROMPT }],
            },
        });

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GuardError::Network(format!("Gemini request failed: {}", e)))?;

        let data: Value = resp
            .json()
            .await
            .map_err(|e| GuardError::ClassifierApi(format!("Parse error: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(GuardError::ClassifierApi(
                error["message"].as_str().unwrap_or("Unknown").to_string(),
            ));
        }

        // A response with no text part degrades to the empty object, which
        // parses cleanly downstream.
        Ok(data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("{}")
            .to_string())
    }
}
