//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::Router;
use here_common::{AppConfig, AppError, AppResult};
use here_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Connect the configured store and create AppState
pub async fn create_app_state(config: &AppConfig) -> AppResult<AppState> {
    info!(backend = ?config.store.backend, "Connecting to store...");
    let store = here_store::connect(&config.store).await?;
    info!("Store ready");

    Ok(AppState::new(ServiceContext::new(store)))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener.local_addr().map_err(AppError::server)?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::server(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let address = config.api.address();

    // Create app state
    let state = create_app_state(&config).await?;

    // Build application
    let app = create_app(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {address}: {e}")))?;

    // Run server
    run_server(app, listener).await
}
