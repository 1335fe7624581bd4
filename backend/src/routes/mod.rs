//! Route definitions for the Brewly pairing server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/pairings", pairing_routes())
        .nest("/reports", report_routes())
}

/// Pairing routes, one per scoring mode
fn pairing_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", post(handlers::score_catalog))
        .route("/b2b", post(handlers::score_b2b))
        .route("/custom", post(handlers::score_custom))
}

/// Report export routes
fn report_routes() -> Router<AppState> {
    Router::new().route("/:format", post(handlers::export_report))
}
