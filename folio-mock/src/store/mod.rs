//! In-memory folio store
//!
//! Holds every sequence and series behind one `parking_lot::RwLock`. Counter
//! mutations (issue, override) run under the write lock, so concurrent
//! issuance never hands out the same number twice.

mod sequences;
mod series;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use parking_lot::RwLock;
use shared::models::{DocumentType, FolioSequence, InvoiceSeries};
use shared::util::current_year;

#[derive(Debug, Default)]
struct StoreInner {
    sequences: HashMap<DocumentType, FolioSequence>,
    series: BTreeMap<i64, InvoiceSeries>,
    /// Known company tax profiles
    company_setting_ids: BTreeSet<i64>,
}

#[derive(Debug, Default)]
pub struct FolioStore {
    inner: RwLock<StoreInner>,
    /// Fixed calendar year instead of the clock
    pinned_year: RwLock<Option<i32>>,
}

impl FolioStore {
    /// Store with one sequence per document type and the given tax profiles
    pub fn seeded(company_setting_ids: impl IntoIterator<Item = i64>) -> Self {
        let store = Self::default();
        let year = store.year();
        {
            let mut inner = store.inner.write();
            for document_type in DocumentType::ALL {
                inner
                    .sequences
                    .insert(document_type, FolioSequence::seed(document_type, year));
            }
            inner.company_setting_ids.extend(company_setting_ids);
        }
        store
    }

    /// Calendar year used for rendering and yearly reset
    pub fn year(&self) -> i32 {
        (*self.pinned_year.read()).unwrap_or_else(current_year)
    }

    pub fn pin_year(&self, year: Option<i32>) {
        *self.pinned_year.write() = year;
        tracing::debug!(?year, "Store year pinned");
    }

    pub fn add_company_setting(&self, company_setting_id: i64) {
        self.inner.write().company_setting_ids.insert(company_setting_id);
    }

    pub fn has_company_setting(&self, company_setting_id: i64) -> bool {
        self.inner
            .read()
            .company_setting_ids
            .contains(&company_setting_id)
    }
}
