//! Editable list of sequence records.
//!
//! Owns the fetched records, the single row in edit mode and the
//! notifications raised by every action. Errors stop here: each action
//! reports through a [`Notification`] and a `bool`/outcome return.

use shared::folio::SequenceRecord;
use shared::folio::validation::{normalize_prefix, normalize_series_code};
use shared::models::{CfdiType, FolioSequence, InvoiceSeries, InvoiceSeriesCreate};

use crate::api::{FolioSequenceApi, InvoiceSeriesApi, SequenceGateway, SeriesGateway};
use crate::editor::FormatEditor;
use crate::notify::Notification;
use crate::saga::{self, SaveOutcome};

/// Folio sequences per document type
pub type FolioSequenceListView<C> = SeriesListView<FolioSequence, FolioSequenceApi<C>>;
/// CFDI invoice series of one tax profile
pub type InvoiceSeriesListView<C> = SeriesListView<InvoiceSeries, InvoiceSeriesApi<C>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Holds the message shown in place of the list
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    Editing,
    Saving,
}

/// The one row currently in edit mode
#[derive(Debug, Clone)]
pub struct EditSession<K> {
    pub key: K,
    pub editor: FormatEditor,
    saving: bool,
}

impl<K> EditSession<K> {
    pub fn is_saving(&self) -> bool {
        self.saving
    }
}

pub struct SeriesListView<R: SequenceRecord, G> {
    gateway: G,
    records: Vec<R>,
    load_state: LoadState,
    editing: Option<EditSession<R::Key>>,
    notifications: Vec<Notification>,
}

impl<R, G> SeriesListView<R, G>
where
    R: SequenceRecord,
    G: SequenceGateway<R>,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            load_state: LoadState::Idle,
            editing: None,
            notifications: Vec::new(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn record(&self, key: &R::Key) -> Option<&R> {
        self.records.iter().find(|r| &r.key() == key)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Fetch every record in scope, replacing the list wholesale.
    ///
    /// On failure the list is emptied and the view shows an error state.
    pub async fn load(&mut self) -> bool {
        self.load_state = LoadState::Loading;
        match self.gateway.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Loaded folio records");
                self.records = records;
                self.load_state = LoadState::Loaded;
                let still_there = self
                    .editing
                    .as_ref()
                    .is_none_or(|s| self.records.iter().any(|r| r.key() == s.key));
                if !still_there {
                    self.editing = None;
                }
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load folio records");
                let message = err.user_message();
                self.records.clear();
                self.editing = None;
                self.load_state = LoadState::Failed(message.clone());
                self.notify(Notification::error(format!("Could not load: {message}")));
                false
            }
        }
    }

    pub fn row_state(&self, key: &R::Key) -> RowState {
        match &self.editing {
            Some(session) if &session.key == key && session.saving => RowState::Saving,
            Some(session) if &session.key == key => RowState::Editing,
            _ => RowState::Viewing,
        }
    }

    pub fn editing(&self) -> Option<&EditSession<R::Key>> {
        self.editing.as_ref()
    }

    /// Put `key` in edit mode. Any other row's unsaved edit is discarded.
    pub fn start_edit(&mut self, key: &R::Key) -> bool {
        let Some(record) = self.record(key) else {
            return false;
        };
        let editor = FormatEditor::open(record);
        if let Some(previous) = self.editing.take() {
            if &previous.key != key {
                tracing::debug!(discarded = %previous.key, "Discarding unsaved edit");
            }
        }
        self.editing = Some(EditSession {
            key: key.clone(),
            editor,
            saving: false,
        });
        true
    }

    pub fn editor_mut(&mut self) -> Option<&mut FormatEditor> {
        self.editing
            .as_mut()
            .filter(|s| !s.saving)
            .map(|s| &mut s.editor)
    }

    /// Leave edit mode without any request
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the row being edited.
    ///
    /// Full success closes the editor. A rejected or failed format step keeps
    /// it open as typed. When only the override fails the editor stays open on
    /// the saved format with the override input intact.
    pub async fn save(&mut self) -> Option<SaveOutcome<R>> {
        let session = self.editing.as_mut()?;
        session.saving = true;
        let key = session.key.clone();
        let editor = session.editor.clone();

        let outcome = saga::save_row::<R, G>(&self.gateway, &key, &editor).await;

        if let Some(record) = outcome.latest() {
            self.replace_record(record.clone());
        }

        if outcome.is_success() {
            self.editing = None;
        } else if let Some(session) = self.editing.as_mut() {
            session.saving = false;
            if outcome.is_partial() {
                if let Some(record) = outcome.latest() {
                    session.editor.rebase(record);
                }
            }
        }

        let notification = outcome.notification(&key);
        self.notify(notification);

        if outcome.wrote_anything() {
            self.load().await;
        }
        Some(outcome)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn replace_record(&mut self, record: R) {
        let key = record.key();
        match self.records.iter_mut().find(|r| r.key() == key) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }
}

impl<G: SeriesGateway> SeriesListView<InvoiceSeries, G> {
    /// Tax profile the gateway is scoped to; required to bootstrap defaults
    pub fn tax_profile(&self) -> Option<i64> {
        self.gateway.company_setting_id()
    }

    /// Bootstrap is offered only for a loaded, empty list with a tax profile
    pub fn can_initialize_defaults(&self) -> bool {
        self.tax_profile().is_some()
            && self.load_state == LoadState::Loaded
            && self.records.is_empty()
    }

    /// Create the standard series for every CFDI type in one call
    pub async fn initialize_defaults(&mut self) -> bool {
        let Some(company_setting_id) = self.tax_profile() else {
            self.notify(Notification::error("No tax profile configured"));
            return false;
        };
        if !self.can_initialize_defaults() {
            return false;
        }
        match self.gateway.initialize_defaults(company_setting_id).await {
            Ok(created) => {
                tracing::info!(company_setting_id, count = created.len(), "Default series created");
                self.notify(Notification::success(format!(
                    "Created {} default series",
                    created.len()
                )));
                self.load().await;
                true
            }
            Err(err) => {
                self.notify(Notification::error(format!(
                    "Could not create default series: {}",
                    err.user_message()
                )));
                false
            }
        }
    }

    pub async fn set_default(&mut self, id: i64) -> bool {
        match self.gateway.set_default(id).await {
            Ok(series) => {
                self.notify(Notification::success(format!(
                    "{} is now the default for {}",
                    series.code,
                    series.cfdi_type.label()
                )));
                self.load().await;
                true
            }
            Err(err) => {
                self.notify(Notification::error(format!(
                    "Could not set default: {}",
                    err.user_message()
                )));
                false
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> bool {
        match self.gateway.delete(id).await {
            Ok(_) => {
                if self.editing.as_ref().is_some_and(|s| s.key == id) {
                    self.editing = None;
                }
                self.notify(Notification::success("Series deleted"));
                self.load().await;
                true
            }
            Err(err) => {
                self.notify(Notification::error(format!(
                    "Could not delete series: {}",
                    err.user_message()
                )));
                false
            }
        }
    }

    /// Create a series; code and prefix are normalized first
    pub async fn create(&mut self, mut payload: InvoiceSeriesCreate) -> bool {
        let normalized = normalize_series_code(&payload.code)
            .and_then(|code| Ok((code, normalize_prefix(&payload.format.prefix)?)));
        match normalized {
            Ok((code, prefix)) => {
                payload.code = code;
                payload.format.prefix = prefix;
            }
            Err(err) => {
                self.notify(Notification::error(err.message));
                return false;
            }
        }

        match self.gateway.create(&payload).await {
            Ok(series) => {
                self.notify(Notification::success(format!("Created series {}", series.code)));
                self.load().await;
                true
            }
            Err(err) => {
                self.notify(Notification::error(format!(
                    "Could not create series: {}",
                    err.user_message()
                )));
                false
            }
        }
    }

    /// Current default of `cfdi_type` among the loaded series
    pub fn default_series(&self, cfdi_type: CfdiType) -> Option<&InvoiceSeries> {
        self.records
            .iter()
            .find(|s| s.cfdi_type == cfdi_type && s.is_default)
    }
}
