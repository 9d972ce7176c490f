//! Invoice Series Model (CFDI folio series)

use serde::{Deserialize, Serialize};

use super::document_type::{CfdiType, DocumentType};
use crate::folio::{FolioCounter, FolioFormat, FolioFormatPatch, SequenceRecord};

/// Invoice series entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSeries {
    pub id: i64,
    /// Owning company tax profile
    pub company_setting_id: i64,
    /// Unique code, `[A-Z0-9-]+`
    pub code: String,
    pub name: String,
    pub cfdi_type: CfdiType,
    /// Restricts which originating document type may draw from this series
    pub source_type: Option<DocumentType>,
    pub is_active: bool,
    /// At most one default per `cfdi_type`
    pub is_default: bool,
    #[serde(flatten)]
    pub format: FolioFormat,
    #[serde(flatten)]
    pub counter: FolioCounter,
    pub next_folio: String,
    /// Folios issued from this series; non-zero blocks deletion
    #[serde(default)]
    pub issued_count: u64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl InvoiceSeries {
    pub fn refresh_next_folio(&mut self, year: i32) {
        self.next_folio = self.format.render(year, self.counter.upcoming(year));
    }

    /// Whether this series may serve a document of `source_type`
    pub fn accepts(&self, source_type: Option<DocumentType>) -> bool {
        match (self.source_type, source_type) {
            (None, _) => true,
            (Some(own), Some(requested)) => own == requested,
            (Some(_), None) => false,
        }
    }
}

impl SequenceRecord for InvoiceSeries {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }

    fn format(&self) -> &FolioFormat {
        &self.format
    }

    fn counter(&self) -> &FolioCounter {
        &self.counter
    }

    fn next_folio(&self) -> &str {
        &self.next_folio
    }
}

/// Create invoice series payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSeriesCreate {
    pub company_setting_id: i64,
    pub code: String,
    pub name: String,
    pub cfdi_type: CfdiType,
    pub source_type: Option<DocumentType>,
    #[serde(flatten)]
    pub format: FolioFormat,
    #[serde(default)]
    pub reset_yearly: bool,
    #[serde(default)]
    pub is_default: bool,
}

/// Update invoice series payload (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceSeriesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub format: FolioFormatPatch,
}

impl From<FolioFormatPatch> for InvoiceSeriesUpdate {
    fn from(format: FolioFormatPatch) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }
}

/// List filter for invoice series
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceSeriesQuery {
    pub company_setting_id: Option<i64>,
    pub cfdi_type: Option<CfdiType>,
}

impl InvoiceSeriesQuery {
    /// Query-string form, empty when no filter is set
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(id) = self.company_setting_id {
            parts.push(format!("company_setting_id={id}"));
        }
        if let Some(cfdi) = self.cfdi_type {
            parts.push(format!("cfdi_type={}", cfdi.code()));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    pub fn matches(&self, series: &InvoiceSeries) -> bool {
        self.company_setting_id
            .is_none_or(|id| series.company_setting_id == id)
            && self.cfdi_type.is_none_or(|c| series.cfdi_type == c)
    }
}

/// Lookup of the series used when none is chosen explicitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSeriesQuery {
    pub company_setting_id: i64,
    pub cfdi_type: CfdiType,
    pub source_type: Option<DocumentType>,
}

/// Bulk bootstrap payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InitializeDefaults {
    pub company_setting_id: i64,
}
