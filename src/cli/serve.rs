use std::path::Path;

use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config;
use crate::errors::GuardError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), GuardError> {
    info!(host = %args.host, port = args.port, "Starting API server");

    let cfg = config::load_config(args.config.as_deref().map(Path::new)).await?;
    let state = api::create_app_state(&cfg)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| GuardError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
