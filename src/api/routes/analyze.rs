use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::api::models::AnalyzeRequest;
use crate::api::AppState;
use crate::classifier::ScanInput;
use crate::errors::GuardError;
use crate::models::RiskAssessment;

/// Scan one submitted artifact. Always HTTP 200 with a best-effort risk
/// object, even when an upstream dependency degraded; the one
/// whole-request failure is a body that cannot be parsed.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RiskAssessment>, GuardError> {
    // An empty body is not rejected: the classifier simply runs with no
    // content parts.
    let req: AnalyzeRequest = if body.is_empty() {
        AnalyzeRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| GuardError::Internal(format!("request body parsing failed: {}", e)))?
    };

    let request_id = uuid::Uuid::new_v4();
    let input = ScanInput {
        text: req.text,
        image_data: req.image_data,
    };

    info!(
        %request_id,
        has_text = input.url_candidate().is_some(),
        has_image = input.image_payload().is_some(),
        "analyzing artifact"
    );

    let report = state.scanner.scan(&input).await;

    info!(
        %request_id,
        verdict = ?report.verdict,
        risk_score = ?report.risk_score,
        degraded = report.is_degraded(),
        "scan complete"
    );

    Ok(Json(report))
}
