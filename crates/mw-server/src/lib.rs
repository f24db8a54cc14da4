//! Med Writer HTTP API server (Axum).
//!
//! Exposes the text pipeline: extraction from editor trees, normalization,
//! sentence chunking, change detection and text statistics.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default configuration.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::text_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests;
