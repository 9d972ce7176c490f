//! Client error types

use shared::ErrorCode;
use thiserror::Error;

/// Error body returned by the folio API on non-2xx responses
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the server
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Typed error code when the server sent one we know
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }

    /// Text suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError.message().to_string(),
            Self::Http(_) => ErrorCode::NetworkError.message().to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ApiErrorResponse> for ClientError {
    fn from(err: ApiErrorResponse) -> Self {
        Self::Api {
            code: err.code,
            message: err.message,
            details: err.details,
        }
    }
}

/// Map a failed response body onto a client error
pub(crate) fn from_status(status: http::StatusCode, text: String) -> ClientError {
    if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
        return api_err.into();
    }
    match status {
        http::StatusCode::UNAUTHORIZED => ClientError::Unauthorized(text),
        http::StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        http::StatusCode::NOT_FOUND => ClientError::NotFound(text),
        http::StatusCode::BAD_REQUEST => ClientError::Validation(text),
        _ => ClientError::Internal(text),
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_body_wins_over_status() {
        let body = r#"{"code":4104,"message":"Series 7 has issued folios","details":{"issued_count":3}}"#;
        let err = from_status(http::StatusCode::CONFLICT, body.to_string());
        assert_eq!(err.error_code(), Some(ErrorCode::SeriesInUse));
        assert_eq!(err.user_message(), "Series 7 has issued folios");
    }

    #[test]
    fn plain_body_falls_back_to_status() {
        let err = from_status(http::StatusCode::NOT_FOUND, "nope".into());
        assert!(matches!(err, ClientError::NotFound(ref t) if t == "nope"));
        assert_eq!(err.error_code(), None);

        let err = from_status(http::StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(err, ClientError::Internal(_)));
    }
}
