use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::GuardError;

impl IntoResponse for GuardError {
    fn into_response(self) -> axum::response::Response {
        // Any error that escapes a request handler is an internal fault;
        // upstream degradations never reach this path.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": self.to_string()})),
        )
            .into_response()
    }
}
