//! Folio Sequence API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::AppResult;
use shared::folio::{FolioFormatPatch, IssuedFolio};
use shared::models::{DocumentType, FolioSequence, SetInitialFolio};

use crate::state::AppState;

/// GET /api/folio-sequences
pub async fn list(State(state): State<AppState>) -> Json<Vec<FolioSequence>> {
    Json(state.store.list_sequences())
}

/// GET /api/folio-sequences/:document_type
pub async fn get(
    State(state): State<AppState>,
    Path(document_type): Path<DocumentType>,
) -> AppResult<Json<FolioSequence>> {
    Ok(Json(state.store.get_sequence(document_type)?))
}

/// PATCH /api/folio-sequences/:document_type - format fields only
pub async fn update(
    State(state): State<AppState>,
    Path(document_type): Path<DocumentType>,
    Json(patch): Json<FolioFormatPatch>,
) -> AppResult<Json<FolioSequence>> {
    Ok(Json(state.store.update_sequence(document_type, &patch)?))
}

/// POST /api/folio-sequences/:document_type/set-initial
pub async fn set_initial(
    State(state): State<AppState>,
    Path(document_type): Path<DocumentType>,
    Json(payload): Json<SetInitialFolio>,
) -> AppResult<Json<FolioSequence>> {
    Ok(Json(state.store.set_sequence_initial(document_type, payload)?))
}

/// POST /api/folio-sequences/:document_type/issue
pub async fn issue(
    State(state): State<AppState>,
    Path(document_type): Path<DocumentType>,
) -> AppResult<Json<IssuedFolio>> {
    Ok(Json(state.store.issue_sequence(document_type)?))
}
