//! [`AppError`] and the JSON envelope it travels in

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Coded error raised by the store and returned by the HTTP layer.
///
/// `details` names the offending field or id so the client can point at it.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Rejected input, tagged with the offending field name
    pub fn invalid_field(code: ErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self::with_message(code, message).with_detail("field", field)
    }

    /// Folio sequence for a document type does not exist
    pub fn sequence_not_found(document_type: impl Into<String>) -> Self {
        let d = document_type.into();
        Self::with_message(
            ErrorCode::SequenceNotFound,
            format!("Folio sequence {} not found", d),
        )
        .with_detail("document_type", d)
    }

    /// Invoice series does not exist
    pub fn series_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::SeriesNotFound,
            format!("Invoice series {} not found", id),
        )
        .with_detail("id", id)
    }

    /// Invoice series still referenced by issued documents
    pub fn series_in_use(id: i64, issued: u64) -> Self {
        Self::new(ErrorCode::SeriesInUse)
            .with_detail("id", id)
            .with_detail("issued_count", issued)
    }
}

/// Response envelope; the mock server only emits it for failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// `0` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        if !self.code.category().is_user_facing() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "folio request failed"
            );
        }

        (status, Json(body)).into_response()
    }
}
