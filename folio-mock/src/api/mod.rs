//! HTTP API

mod folio_sequences;
mod health;
mod invoice_series;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router with state attached
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(folio_sequences::router())
        .merge(invoice_series::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
