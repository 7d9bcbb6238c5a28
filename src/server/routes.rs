//! HTTP route definitions

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/treino", post(handlers::train))
        .route("/classificar", post(handlers::classify))
        .route("/ajustar", post(handlers::relabel))
        .with_state(state)
}
