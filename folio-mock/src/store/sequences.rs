//! Folio sequences keyed by document type

use shared::folio::validation::{validate_initial_folio, validate_patch};
use shared::folio::{FolioFormatPatch, IssuedFolio};
use shared::models::{DocumentType, FolioSequence, SetInitialFolio};
use shared::util::now_millis;
use shared::{AppError, AppResult};

use super::FolioStore;

impl FolioStore {
    pub fn list_sequences(&self) -> Vec<FolioSequence> {
        let year = self.year();
        let inner = self.inner.read();
        let mut sequences: Vec<_> = DocumentType::ALL
            .iter()
            .filter_map(|d| inner.sequences.get(d))
            .cloned()
            .collect();
        for sequence in &mut sequences {
            sequence.refresh_next_folio(year);
        }
        sequences
    }

    pub fn get_sequence(&self, document_type: DocumentType) -> AppResult<FolioSequence> {
        let year = self.year();
        let mut sequence = self
            .inner
            .read()
            .sequences
            .get(&document_type)
            .cloned()
            .ok_or_else(|| AppError::sequence_not_found(document_type.as_str()))?;
        sequence.refresh_next_folio(year);
        Ok(sequence)
    }

    /// Apply a format patch; the counter value is never touched
    pub fn update_sequence(
        &self,
        document_type: DocumentType,
        patch: &FolioFormatPatch,
    ) -> AppResult<FolioSequence> {
        validate_patch(patch)?;
        let year = self.year();
        let mut inner = self.inner.write();
        let sequence = inner
            .sequences
            .get_mut(&document_type)
            .ok_or_else(|| AppError::sequence_not_found(document_type.as_str()))?;
        patch.apply(&mut sequence.format, &mut sequence.counter);
        sequence.updated_at = Some(now_millis());
        sequence.refresh_next_folio(year);
        tracing::info!(%document_type, prefix = %sequence.format.prefix, "Folio format updated");
        Ok(sequence.clone())
    }

    /// Store `current_sequence` verbatim
    pub fn set_sequence_initial(
        &self,
        document_type: DocumentType,
        payload: SetInitialFolio,
    ) -> AppResult<FolioSequence> {
        validate_initial_folio(payload.current_sequence)?;
        let year = self.year();
        let mut inner = self.inner.write();
        let sequence = inner
            .sequences
            .get_mut(&document_type)
            .ok_or_else(|| AppError::sequence_not_found(document_type.as_str()))?;
        let previous = sequence.counter.current_sequence;
        sequence.counter.set_current(payload.current_sequence, year);
        sequence.updated_at = Some(now_millis());
        sequence.refresh_next_folio(year);
        tracing::warn!(
            %document_type,
            previous,
            current_sequence = payload.current_sequence,
            "Folio counter overridden"
        );
        Ok(sequence.clone())
    }

    pub fn issue_sequence(&self, document_type: DocumentType) -> AppResult<IssuedFolio> {
        let year = self.year();
        let mut inner = self.inner.write();
        let sequence = inner
            .sequences
            .get_mut(&document_type)
            .ok_or_else(|| AppError::sequence_not_found(document_type.as_str()))?;
        let issued = sequence.counter.issue(&sequence.format, year);
        sequence.updated_at = Some(now_millis());
        sequence.refresh_next_folio(year);
        tracing::info!(%document_type, folio = %issued.folio, "Folio issued");
        Ok(issued)
    }
}
