pub mod errors;
pub mod models;
pub mod routes;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::GuardConfig;
use crate::errors::GuardError;
use crate::scanner::{build_scanner, Scanner};

#[derive(Clone)]
pub struct AppState {
    pub scanner: Scanner,
}

pub fn create_app_state(config: &GuardConfig) -> Result<AppState, GuardError> {
    Ok(AppState {
        scanner: build_scanner(config)?,
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/analyze", axum::routing::post(routes::analyze::analyze))
        // The scan endpoint is consumed by browser clients from any origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
