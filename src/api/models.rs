use serde::Deserialize;

/// Body of `POST /api/analyze`. Both fields are optional; an empty body
/// is accepted and forwarded to the classifier with no content parts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// URL or free text.
    pub text: Option<String>,
    /// Base64-encoded PNG screenshot.
    pub image_data: Option<String>,
}
