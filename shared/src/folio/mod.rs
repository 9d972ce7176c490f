//! Folio numbering
//!
//! Format grammar, counter semantics and field rules shared by the client
//! and the server.

mod counter;
mod format;
mod patch;
pub mod validation;

pub use counter::{FolioCounter, IssuedFolio};
pub use format::{
    DEFAULT_PADDING, FolioFormat, MAX_PADDING, MAX_PREFIX_LEN, MAX_SEPARATOR_LEN, MIN_PADDING,
    YearFormat,
};
pub use patch::FolioFormatPatch;

use std::fmt;

/// A server record that owns a folio counter.
///
/// Implemented by [`FolioSequence`](crate::models::FolioSequence) (keyed by
/// document type) and [`InvoiceSeries`](crate::models::InvoiceSeries) (keyed
/// by id).
pub trait SequenceRecord: Clone + fmt::Debug + Send + Sync + 'static {
    type Key: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    fn key(&self) -> Self::Key;
    fn format(&self) -> &FolioFormat;
    fn counter(&self) -> &FolioCounter;
    /// Server-rendered preview of the next folio
    fn next_folio(&self) -> &str;

    /// Recompute the preview locally from the record's own fields,
    /// pending yearly reset included
    fn preview(&self, year: i32) -> String {
        self.format().render(year, self.counter().upcoming(year))
    }
}
