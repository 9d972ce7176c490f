//! Folio Sequence Model (one counter per document type)

use serde::{Deserialize, Serialize};

use super::document_type::DocumentType;
use crate::folio::{FolioCounter, FolioFormat, SequenceRecord};

/// Folio sequence entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioSequence {
    /// Unique key
    pub document_type: DocumentType,
    #[serde(flatten)]
    pub format: FolioFormat,
    #[serde(flatten)]
    pub counter: FolioCounter,
    /// Read-only preview rendered by the server
    pub next_folio: String,
    pub updated_at: Option<i64>,
}

impl FolioSequence {
    /// Fresh sequence with the document type's default prefix
    pub fn seed(document_type: DocumentType, year: i32) -> Self {
        let format = FolioFormat::new(document_type.default_prefix());
        let counter = FolioCounter::new(true);
        let next_folio = format.preview(counter.current_sequence, year);
        Self {
            document_type,
            format,
            counter,
            next_folio,
            updated_at: None,
        }
    }

    /// Re-render `next_folio` after any change to format or counter
    pub fn refresh_next_folio(&mut self, year: i32) {
        self.next_folio = self.format.render(year, self.counter.upcoming(year));
    }
}

impl SequenceRecord for FolioSequence {
    type Key = DocumentType;

    fn key(&self) -> DocumentType {
        self.document_type
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

/// Counter override payload: the server stores `current_sequence` verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInitialFolio {
    pub current_sequence: u64,
}

impl SetInitialFolio {
    /// Payload that makes the next issuance produce exactly `next_folio`
    pub fn for_next_folio(next_folio: u64) -> Option<Self> {
        (next_folio > 0).then(|| Self {
            current_sequence: next_folio - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_flat() {
        let seq = FolioSequence::seed(DocumentType::Quote, 2026);
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json["document_type"], "quote");
        assert_eq!(json["prefix"], "COT");
        assert_eq!(json["current_sequence"], 0);
        assert_eq!(json["next_folio"], "COT-000001");

        let back: FolioSequence = serde_json::from_value(json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn override_payload_targets_previous_number() {
        assert_eq!(
            SetInitialFolio::for_next_folio(100),
            Some(SetInitialFolio {
                current_sequence: 99
            })
        );
        assert_eq!(SetInitialFolio::for_next_folio(0), None);
    }

    #[test]
    fn preview_matches_server_render() {
        let mut seq = FolioSequence::seed(DocumentType::Invoice, 2026);
        seq.counter.current_sequence = 41;
        seq.format.padding = 4;
        seq.refresh_next_folio(2026);
        assert_eq!(seq.next_folio, "FAC-0042");
        assert_eq!(seq.preview(2026), seq.next_folio);
    }
}
