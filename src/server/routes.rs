use crate::error::{ClimateError, Result};
use crate::server::handlers;
use crate::server::AppState;
use crate::utils::constants::{
    ROUTE_PRECIPITATION, ROUTE_START, ROUTE_START_END, ROUTE_STATIONS, ROUTE_TOBS,
};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Build the API router. Static routes take precedence over the `:start`
/// capture, so `/api/v1.0/tobs` never reaches the summary handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(ROUTE_PRECIPITATION, get(handlers::precipitation))
        .route(ROUTE_STATIONS, get(handlers::stations))
        .route(ROUTE_TOBS, get(handlers::tobs))
        .route(ROUTE_START, get(handlers::summary_from))
        .route(ROUTE_START_END, get(handlers::summary_between))
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(state: AppState, address: &str) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
