//! Shared types for folio services
//!
//! Domain models, the folio format grammar and the unified error system used
//! by both the client and the server.

pub mod error;
pub mod folio;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use folio::{FolioCounter, FolioFormat, FolioFormatPatch, SequenceRecord, YearFormat};
pub use models::{CfdiType, DocumentType, FolioSequence, InvoiceSeries};
