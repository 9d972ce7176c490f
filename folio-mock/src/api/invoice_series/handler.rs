//! Invoice Series API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::AppResult;
use shared::folio::IssuedFolio;
use shared::models::{
    DefaultSeriesQuery, InitializeDefaults, InvoiceSeries, InvoiceSeriesCreate,
    InvoiceSeriesQuery, InvoiceSeriesUpdate, SetInitialFolio,
};

use crate::state::AppState;

/// GET /api/invoice-series?company_setting_id=&cfdi_type=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<InvoiceSeriesQuery>,
) -> Json<Vec<InvoiceSeries>> {
    Json(state.store.list_series(&query))
}

/// GET /api/invoice-series/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InvoiceSeries>> {
    Ok(Json(state.store.get_series(id)?))
}

/// POST /api/invoice-series
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<InvoiceSeriesCreate>,
) -> AppResult<Json<InvoiceSeries>> {
    Ok(Json(state.store.create_series(payload)?))
}

/// PATCH /api/invoice-series/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<InvoiceSeriesUpdate>,
) -> AppResult<Json<InvoiceSeries>> {
    Ok(Json(state.store.update_series(id, &payload)?))
}

/// DELETE /api/invoice-series/:id - refused once folios were issued
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    Ok(Json(state.store.delete_series(id)?))
}

/// POST /api/invoice-series/:id/set-default
pub async fn set_default(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InvoiceSeries>> {
    Ok(Json(state.store.set_default_series(id)?))
}

/// POST /api/invoice-series/:id/set-initial-folio
pub async fn set_initial_folio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetInitialFolio>,
) -> AppResult<Json<InvoiceSeries>> {
    Ok(Json(state.store.set_series_initial(id, payload)?))
}

/// POST /api/invoice-series/:id/issue
pub async fn issue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<IssuedFolio>> {
    Ok(Json(state.store.issue_series(id)?))
}

/// GET /api/invoice-series/default?company_setting_id=&cfdi_type=&source_type=
pub async fn resolve_default(
    State(state): State<AppState>,
    Query(query): Query<DefaultSeriesQuery>,
) -> AppResult<Json<InvoiceSeries>> {
    Ok(Json(state.store.resolve_default(&query)?))
}

/// POST /api/invoice-series/initialize-defaults
pub async fn initialize_defaults(
    State(state): State<AppState>,
    Json(payload): Json<InitializeDefaults>,
) -> AppResult<Json<Vec<InvoiceSeries>>> {
    Ok(Json(state.store.initialize_defaults(payload.company_setting_id)?))
}
