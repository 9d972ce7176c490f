//! Data models
//!
//! Shared between folio-mock and folio-client (via API).
//! Series IDs are `i64`; sequences are keyed by [`DocumentType`].

pub mod document_type;
pub mod folio_sequence;
pub mod invoice_series;

// Re-exports
pub use document_type::*;
pub use folio_sequence::*;
pub use invoice_series::*;
