use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::ReputationOracle;
use crate::errors::GuardError;

const ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";
const CLIENT_ID: &str = "phishguard";

/// Google Safe Browsing v4 threat-match lookup.
pub struct SafeBrowsingClient {
    client: Client,
    api_key: String,
}

impl SafeBrowsingClient {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, GuardError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GuardError::Config(format!("HTTP client build failed: {}", e)))?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ReputationOracle for SafeBrowsingClient {
    async fn check(&self, url: &str) -> Result<bool, GuardError> {
        // The supplied text may not be a URL at all; relevance is the
        // oracle's call, so no syntax validation here.
        let body = json!({
            "client": {
                "clientId": CLIENT_ID,
                "clientVersion": env!("CARGO_PKG_VERSION"),
            },
            "threatInfo": {
                "threatTypes": [
                    "MALWARE",
                    "SOCIAL_ENGINEERING",
                    "UNWANTED_SOFTWARE",
                    "POTENTIALLY_HARMFUL_APPLICATION",
                ],
                "platformTypes": ["ANY_PLATFORM"],
                "threatEntryTypes": ["URL"],
                "threatEntries": [{ "url": url }],
            }
        });

        let resp = self
            .client
            .post(format!("{}?key={}", ENDPOINT, self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GuardError::Network(format!("Safe Browsing request failed: {}", e)))?;

        let data: Value = resp
            .json()
            .await
            .map_err(|e| GuardError::Reputation(format!("Safe Browsing parse error: {}", e)))?;

        // An empty body means no match; any non-empty `matches` list means
        // the URL is listed.
        Ok(data
            .get("matches")
            .and_then(Value::as_array)
            .map_or(false, |m| !m.is_empty()))
    }
}
