//! Status line for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::SequenceNotFound
            | Self::SeriesNotFound
            | Self::DefaultSeriesMissing
            | Self::TaxProfileNotFound => StatusCode::NOT_FOUND,

            Self::SeriesCodeExists
            | Self::SeriesInUse
            | Self::SeriesAlreadyInitialized => StatusCode::CONFLICT,

            // Transient, safe to retry
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // Validation and business rules
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_records_are_404() {
        for code in [
            ErrorCode::SequenceNotFound,
            ErrorCode::SeriesNotFound,
            ErrorCode::DefaultSeriesMissing,
            ErrorCode::TaxProfileNotFound,
        ] {
            assert_eq!(code.http_status(), StatusCode::NOT_FOUND, "{code}");
        }
    }

    #[test]
    fn series_state_clashes_are_409() {
        assert_eq!(ErrorCode::SeriesInUse.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::SeriesAlreadyInitialized.http_status(),
            StatusCode::CONFLICT
        );
        // inactive is a rule violation, not a clash
        assert_eq!(
            ErrorCode::SeriesInactive.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn format_errors_are_400() {
        assert_eq!(ErrorCode::InvalidPadding.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::InvalidInitialFolio.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::TimeoutError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
