//! Error families derived from the numeric code

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Family an [`ErrorCode`] belongs to.
///
/// Folio codes are split by their hundreds digit: 40xx covers the
/// per-document sequences, 41xx the invoice series and 42xx the tax
/// profile that owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    /// Folio sequence format and counter (40xx)
    Sequence,
    /// Invoice series lifecycle (41xx)
    Series,
    /// Company tax profile (42xx)
    TaxProfile,
    /// 9xxx, plus any code outside a known family
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..4100 => Self::Sequence,
            4100..4200 => Self::Series,
            4200..4300 => Self::TaxProfile,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Sequence => "sequence",
            Self::Series => "series",
            Self::TaxProfile => "tax_profile",
            Self::System => "system",
        }
    }

    /// Whether the user can fix the problem by changing their input
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::System)
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
