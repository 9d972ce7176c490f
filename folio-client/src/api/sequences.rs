//! `/api/folio-sequences`

use async_trait::async_trait;
use shared::folio::{FolioFormatPatch, IssuedFolio};
use shared::models::{DocumentType, FolioSequence, SetInitialFolio};

use super::SequenceGateway;
use crate::{ClientResult, HttpClient};

const BASE: &str = "/api/folio-sequences";

/// Folio sequences, one per document type
#[derive(Debug, Clone)]
pub struct FolioSequenceApi<C> {
    http: C,
}

impl<C: HttpClient> FolioSequenceApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<FolioSequence>> {
        self.http.get(BASE).await
    }

    pub async fn get(&self, document_type: DocumentType) -> ClientResult<FolioSequence> {
        self.http.get(&format!("{BASE}/{document_type}")).await
    }

    pub async fn update_format(
        &self,
        document_type: DocumentType,
        patch: &FolioFormatPatch,
    ) -> ClientResult<FolioSequence> {
        tracing::debug!(%document_type, "Patching folio format");
        self.http
            .patch(&format!("{BASE}/{document_type}"), patch)
            .await
    }

    pub async fn set_initial(
        &self,
        document_type: DocumentType,
        payload: SetInitialFolio,
    ) -> ClientResult<FolioSequence> {
        tracing::info!(
            %document_type,
            current_sequence = payload.current_sequence,
            "Overriding folio counter"
        );
        self.http
            .post(&format!("{BASE}/{document_type}/set-initial"), &payload)
            .await
    }

    /// Draw the next folio; the server owns the counter
    pub async fn issue(&self, document_type: DocumentType) -> ClientResult<IssuedFolio> {
        self.http
            .post_empty(&format!("{BASE}/{document_type}/issue"))
            .await
    }
}

#[async_trait]
impl<C: HttpClient> SequenceGateway<FolioSequence> for FolioSequenceApi<C> {
    async fn list(&self) -> ClientResult<Vec<FolioSequence>> {
        FolioSequenceApi::list(self).await
    }

    async fn update_format(
        &self,
        key: &DocumentType,
        patch: &FolioFormatPatch,
    ) -> ClientResult<FolioSequence> {
        FolioSequenceApi::update_format(self, *key, patch).await
    }

    async fn set_initial(
        &self,
        key: &DocumentType,
        payload: SetInitialFolio,
    ) -> ClientResult<FolioSequence> {
        FolioSequenceApi::set_initial(self, *key, payload).await
    }
}
