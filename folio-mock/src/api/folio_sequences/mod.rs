//! Folio Sequence API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/folio-sequences", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{document_type}", get(handler::get).patch(handler::update))
        .route("/{document_type}/set-initial", post(handler::set_initial))
        .route("/{document_type}/issue", post(handler::issue))
}
