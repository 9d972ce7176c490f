//! In-memory gateway that records every call

use std::sync::Mutex;

use async_trait::async_trait;
use shared::folio::FolioFormatPatch;
use shared::models::{DocumentType, FolioSequence, SetInitialFolio};

use crate::api::SequenceGateway;
use crate::{ClientError, ClientResult};

pub const YEAR: i32 = 2026;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    UpdateFormat(DocumentType, FolioFormatPatch),
    SetInitial(DocumentType, SetInitialFolio),
}

#[derive(Default)]
pub struct RecordingGateway {
    pub records: Mutex<Vec<FolioSequence>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_list: bool,
    pub fail_update: bool,
    pub fail_override: bool,
}

impl RecordingGateway {
    pub fn seeded() -> Self {
        let mut records: Vec<_> = DocumentType::ALL
            .into_iter()
            .map(|d| FolioSequence::seed(d, YEAR))
            .collect();
        if let Some(invoice) = records
            .iter_mut()
            .find(|s| s.document_type == DocumentType::Invoice)
        {
            invoice.counter.current_sequence = 41;
            invoice.refresh_next_folio(YEAR);
        }
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::List)
            .collect()
    }

    pub fn stored(&self, document_type: DocumentType) -> FolioSequence {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.document_type == document_type)
            .cloned()
            .unwrap()
    }

    fn with_record(
        &self,
        key: DocumentType,
        f: impl FnOnce(&mut FolioSequence),
    ) -> ClientResult<FolioSequence> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|s| s.document_type == key)
            .ok_or_else(|| ClientError::NotFound(key.to_string()))?;
        f(record);
        record.refresh_next_folio(YEAR);
        Ok(record.clone())
    }

    fn rejected(message: &str) -> ClientError {
        ClientError::Api {
            code: 9001,
            message: message.to_string(),
            details: None,
        }
    }
}

#[async_trait]
impl SequenceGateway<FolioSequence> for RecordingGateway {
    async fn list(&self) -> ClientResult<Vec<FolioSequence>> {
        self.calls.lock().unwrap().push(Call::List);
        if self.fail_list {
            return Err(Self::rejected("store offline"));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update_format(
        &self,
        key: &DocumentType,
        patch: &FolioFormatPatch,
    ) -> ClientResult<FolioSequence> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::UpdateFormat(*key, patch.clone()));
        if self.fail_update {
            return Err(Self::rejected("update refused"));
        }
        self.with_record(*key, |s| patch.apply(&mut s.format, &mut s.counter))
    }

    async fn set_initial(
        &self,
        key: &DocumentType,
        payload: SetInitialFolio,
    ) -> ClientResult<FolioSequence> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::SetInitial(*key, payload));
        if self.fail_override {
            return Err(Self::rejected("override refused"));
        }
        self.with_record(*key, |s| {
            s.counter.set_current(payload.current_sequence, YEAR)
        })
    }
}
