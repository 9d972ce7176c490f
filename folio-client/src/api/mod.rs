//! Typed folio endpoints and the gateway seams the list view talks through.

mod sequences;
mod series;

pub use sequences::FolioSequenceApi;
pub use series::InvoiceSeriesApi;

use async_trait::async_trait;
use shared::folio::{FolioFormatPatch, SequenceRecord};
use shared::models::{InvoiceSeries, InvoiceSeriesCreate, SetInitialFolio};

use crate::ClientResult;

/// Backend operations every editable sequence list needs
#[async_trait]
pub trait SequenceGateway<R: SequenceRecord>: Send + Sync {
    /// All records in the gateway's scope
    async fn list(&self) -> ClientResult<Vec<R>>;

    /// Partial format update; the counter is never touched
    async fn update_format(&self, key: &R::Key, patch: &FolioFormatPatch) -> ClientResult<R>;

    /// Administrative counter override
    async fn set_initial(&self, key: &R::Key, payload: SetInitialFolio) -> ClientResult<R>;
}

/// Extra actions offered on invoice series
#[async_trait]
pub trait SeriesGateway: SequenceGateway<InvoiceSeries> {
    /// Tax profile this gateway lists and bootstraps, if scoped
    fn company_setting_id(&self) -> Option<i64>;

    async fn create(&self, payload: &InvoiceSeriesCreate) -> ClientResult<InvoiceSeries>;
    async fn delete(&self, id: i64) -> ClientResult<bool>;
    async fn set_default(&self, id: i64) -> ClientResult<InvoiceSeries>;
    async fn initialize_defaults(&self, company_setting_id: i64)
    -> ClientResult<Vec<InvoiceSeries>>;
}
