//! Invoice Series API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/invoice-series", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/default", get(handler::resolve_default))
        .route("/initialize-defaults", post(handler::initialize_defaults))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/set-default", post(handler::set_default))
        .route("/{id}/set-initial-folio", post(handler::set_initial_folio))
        .route("/{id}/issue", post(handler::issue))
}
