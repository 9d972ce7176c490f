//! Folio Client - configuration screens for folio numbering
//!
//! Typed access to the folio API plus the state behind the sequence and
//! invoice series list views: the row format editor, the counter override
//! and the two-step save.

pub mod api;
pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod notify;
pub mod saga;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{FolioSequenceApi, InvoiceSeriesApi, SequenceGateway, SeriesGateway};
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use editor::{CounterOverride, FormatDraft, FormatEditor};
pub use error::{ClientError, ClientResult};
pub use notify::{Notification, NotificationLevel};
pub use saga::{FormatSaveResult, OverrideResult, SaveOutcome};
pub use view::{
    EditSession, FolioSequenceListView, InvoiceSeriesListView, LoadState, RowState,
    SeriesListView,
};

// Re-export shared types for convenience
pub use shared::models::{
    CfdiType, DocumentType, FolioSequence, InvoiceSeries, InvoiceSeriesCreate, SetInitialFolio,
};
