//! Router assembly for the schoolmap HTTP API.
//!
//! [`build_router`] wires the handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive. TraceLayer provides request-level logging via
/// tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/schools/addSchool",
            post(handlers::schools::add_school),
        )
        .route(
            "/api/schools/listSchools",
            get(handlers::schools::list_schools),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
