//! Numeric error codes
//!
//! Codes are stable across the wire; clients branch on the number rather
//! than on the message text. See [`super::ErrorCategory`] for the ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error code, serialized as its bare `u16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    RequiredField = 7,

    // folio sequences
    SequenceNotFound = 4001,
    InvalidPrefix = 4002,
    InvalidSeparator = 4003,
    InvalidPadding = 4004,
    /// Override the counter could never issue after
    InvalidInitialFolio = 4005,

    // invoice series
    SeriesNotFound = 4101,
    SeriesCodeExists = 4102,
    /// Code outside `[A-Z0-9-]+`
    InvalidSeriesCode = 4103,
    /// Series has issued folios and cannot be deleted
    SeriesInUse = 4104,
    SeriesInactive = 4105,
    /// Tax profile already owns at least one series
    SeriesAlreadyInitialized = 4106,
    DefaultSeriesMissing = 4107,

    TaxProfileNotFound = 4201,

    InternalError = 9001,
    NetworkError = 9003,
    TimeoutError = 9004,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 18] = [
        Self::Success,
        Self::RequiredField,
        Self::SequenceNotFound,
        Self::InvalidPrefix,
        Self::InvalidSeparator,
        Self::InvalidPadding,
        Self::InvalidInitialFolio,
        Self::SeriesNotFound,
        Self::SeriesCodeExists,
        Self::InvalidSeriesCode,
        Self::SeriesInUse,
        Self::SeriesInactive,
        Self::SeriesAlreadyInitialized,
        Self::DefaultSeriesMissing,
        Self::TaxProfileNotFound,
        Self::InternalError,
        Self::NetworkError,
        Self::TimeoutError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Stock English message, used when the raiser supplies none
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::RequiredField => "A required field is empty",

            Self::SequenceNotFound => "Folio sequence not found",
            Self::InvalidPrefix => "Prefix must be 1 to 10 characters",
            Self::InvalidSeparator => "Separator must be at most 2 characters",
            Self::InvalidPadding => "Padding must be between 1 and 10",
            Self::InvalidInitialFolio => "Initial folio is out of range",

            Self::SeriesNotFound => "Invoice series not found",
            Self::SeriesCodeExists => "Invoice series code already exists",
            Self::InvalidSeriesCode => {
                "Series code may only contain uppercase letters, digits and hyphens"
            }
            Self::SeriesInUse => "Invoice series is referenced by issued documents",
            Self::SeriesInactive => "Invoice series is inactive",
            Self::SeriesAlreadyInitialized => "Invoice series already exist",
            Self::DefaultSeriesMissing => "No default series for this CFDI type",
            Self::TaxProfileNotFound => "Company tax profile not found",

            Self::InternalError => "Internal server error",
            Self::NetworkError => "Could not reach the folio service",
            Self::TimeoutError => "The folio service did not answer in time",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_back_from_its_number() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn gaps_in_ranges_are_rejected() {
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(1001), Err(InvalidErrorCode(1001)));
        assert_eq!(ErrorCode::try_from(4108), Err(InvalidErrorCode(4108)));
        assert_eq!(
            InvalidErrorCode(4108).to_string(),
            "unknown error code 4108"
        );
    }

    #[test]
    fn wire_form_is_bare_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::SeriesCodeExists).unwrap(), "4102");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::SequenceNotFound);
        assert!(serde_json::from_str::<ErrorCode>("10000").is_err());
        assert_eq!(ErrorCode::SeriesNotFound.to_string(), "4101");
    }
}
