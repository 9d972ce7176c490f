//! Field rules for folio formats
//!
//! Shared by the client-side editor (normalizes before submitting) and the
//! server (rejects what the editor would never send).

use crate::error::{AppError, AppResult, ErrorCode};

use super::format::{
    DEFAULT_PADDING, FolioFormat, MAX_PADDING, MAX_PREFIX_LEN, MAX_SEPARATOR_LEN, MIN_PADDING,
};
use super::patch::FolioFormatPatch;

/// Series codes are short too, but allow a little more room than prefixes
pub const MAX_SERIES_CODE_LEN: usize = 20;

/// Trim and uppercase a prefix, rejecting empty or over-long input.
pub fn normalize_prefix(raw: &str) -> AppResult<String> {
    let prefix = raw.trim().to_uppercase();
    if prefix.is_empty() {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidPrefix,
            "prefix",
            "Prefix must not be empty",
        ));
    }
    let len = prefix.chars().count();
    if len > MAX_PREFIX_LEN {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidPrefix,
            "prefix",
            format!("Prefix is too long ({len} chars, max {MAX_PREFIX_LEN})"),
        ));
    }
    Ok(prefix)
}

pub fn validate_separator(separator: &str) -> AppResult<()> {
    let len = separator.chars().count();
    if len > MAX_SEPARATOR_LEN {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidSeparator,
            "separator",
            format!("Separator is too long ({len} chars, max {MAX_SEPARATOR_LEN})"),
        ));
    }
    Ok(())
}

pub fn validate_padding(padding: u8) -> AppResult<()> {
    if !(MIN_PADDING..=MAX_PADDING).contains(&padding) {
        return Err(AppError::new(ErrorCode::InvalidPadding)
            .with_detail("field", "padding")
            .with_detail("value", padding));
    }
    Ok(())
}

/// Editor-side padding coercion: non-numeric falls back to the default,
/// numbers are clamped into range.
pub fn coerce_padding(raw: &str) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(value) => value.clamp(i64::from(MIN_PADDING), i64::from(MAX_PADDING)) as u8,
        Err(_) => DEFAULT_PADDING,
    }
}

/// Parse the "next folio" input of the counter override.
///
/// Blank, zero, negative or non-numeric input yields `None`: no override.
pub fn parse_next_folio(raw: &str) -> Option<u64> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Some(value as u64),
        _ => None,
    }
}

/// Largest `current_sequence` an override may store, so the next folio
/// still fits the editor's input range.
pub const MAX_CURRENT_SEQUENCE: u64 = i64::MAX as u64 - 1;

/// Server-side check of a counter override payload
pub fn validate_initial_folio(current_sequence: u64) -> AppResult<()> {
    if current_sequence > MAX_CURRENT_SEQUENCE {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidInitialFolio,
            "current_sequence",
            format!("Initial folio must be at most {}", MAX_CURRENT_SEQUENCE + 1),
        )
        .with_detail("value", current_sequence));
    }
    Ok(())
}

/// Uppercase a series code and check it only holds `A-Z`, `0-9` and `-`.
pub fn normalize_series_code(raw: &str) -> AppResult<String> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() || code.len() > MAX_SERIES_CODE_LEN {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidSeriesCode,
            "code",
            format!("Series code must be 1 to {MAX_SERIES_CODE_LEN} characters"),
        ));
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::new(ErrorCode::InvalidSeriesCode).with_detail("field", "code"));
    }
    Ok(code)
}

/// Full check of a stored format
pub fn validate_format(format: &FolioFormat) -> AppResult<()> {
    let prefix = normalize_prefix(&format.prefix)?;
    if prefix != format.prefix {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidPrefix,
            "prefix",
            "Prefix must be uppercase without surrounding spaces",
        ));
    }
    validate_separator(&format.separator)?;
    validate_padding(format.padding)
}

/// Check the fields present in a patch
pub fn validate_patch(patch: &FolioFormatPatch) -> AppResult<()> {
    if let Some(prefix) = &patch.prefix {
        let normalized = normalize_prefix(prefix)?;
        if &normalized != prefix {
            return Err(AppError::invalid_field(
                ErrorCode::InvalidPrefix,
                "prefix",
                "Prefix must be uppercase without surrounding spaces",
            ));
        }
    }
    if let Some(separator) = &patch.separator {
        validate_separator(separator)?;
    }
    if let Some(padding) = patch.padding {
        validate_padding(padding)?;
    }
    Ok(())
}
