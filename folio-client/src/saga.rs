//! Two-step row save: format patch, then the optional counter override.
//!
//! The steps are independent requests. When the patch lands and the override
//! fails, the record keeps its new format with an un-jumped counter and the
//! outcome says so.

use shared::AppError;
use shared::folio::SequenceRecord;

use crate::api::SequenceGateway;
use crate::editor::FormatEditor;
use crate::error::ClientError;
use crate::notify::Notification;

/// Result of the format step
#[derive(Debug)]
pub enum FormatSaveResult<R> {
    /// Nothing changed, no request sent
    Unchanged,
    Saved(R),
    /// Refused locally, no request sent
    Rejected(AppError),
    Failed(ClientError),
}

/// Result of the override step
#[derive(Debug)]
pub enum OverrideResult<R> {
    NotRequested,
    /// Format step did not succeed
    Skipped,
    Applied(R),
    Failed(ClientError),
}

#[derive(Debug)]
pub struct SaveOutcome<R> {
    pub format: FormatSaveResult<R>,
    pub counter: OverrideResult<R>,
}

impl<R: SequenceRecord> SaveOutcome<R> {
    pub fn format_ok(&self) -> bool {
        matches!(
            self.format,
            FormatSaveResult::Unchanged | FormatSaveResult::Saved(_)
        )
    }

    /// Every requested step succeeded
    pub fn is_success(&self) -> bool {
        self.format_ok() && !matches!(self.counter, OverrideResult::Failed(_))
    }

    /// Format written but the override failed
    pub fn is_partial(&self) -> bool {
        matches!(self.format, FormatSaveResult::Saved(_))
            && matches!(self.counter, OverrideResult::Failed(_))
    }

    /// Whether the server state changed at all
    pub fn wrote_anything(&self) -> bool {
        matches!(self.format, FormatSaveResult::Saved(_))
            || matches!(self.counter, OverrideResult::Applied(_))
    }

    /// Latest server representation returned by either step
    pub fn latest(&self) -> Option<&R> {
        match (&self.counter, &self.format) {
            (OverrideResult::Applied(r), _) => Some(r),
            (_, FormatSaveResult::Saved(r)) => Some(r),
            _ => None,
        }
    }

    pub fn notification(&self, key: &R::Key) -> Notification {
        match (&self.format, &self.counter) {
            (FormatSaveResult::Rejected(err), _) => Notification::error(err.message.clone()),
            (FormatSaveResult::Failed(err), _) => Notification::error(format!(
                "Could not save {key}: {}",
                err.user_message()
            )),
            (FormatSaveResult::Saved(_), OverrideResult::Failed(err)) => {
                Notification::warning(format!(
                    "Format of {key} saved, but the counter was not changed: {}",
                    err.user_message()
                ))
            }
            (_, OverrideResult::Failed(err)) => Notification::error(format!(
                "Could not change the counter of {key}: {}",
                err.user_message()
            )),
            (FormatSaveResult::Unchanged, OverrideResult::NotRequested) => {
                Notification::success(format!("No changes to {key}"))
            }
            _ => Notification::success(format!("Saved {key}")),
        }
    }
}

/// Run both steps against `gateway` for the record under `key`
pub async fn save_row<R, G>(gateway: &G, key: &R::Key, editor: &FormatEditor) -> SaveOutcome<R>
where
    R: SequenceRecord,
    G: SequenceGateway<R> + ?Sized,
{
    let patch = match editor.patch() {
        Ok(patch) => patch,
        Err(err) => {
            tracing::debug!(%key, code = %err.code, "Format rejected before submission");
            return SaveOutcome {
                format: FormatSaveResult::Rejected(err),
                counter: OverrideResult::Skipped,
            };
        }
    };

    let format = if patch.is_empty() {
        FormatSaveResult::Unchanged
    } else {
        match gateway.update_format(key, &patch).await {
            Ok(record) => FormatSaveResult::Saved(record),
            Err(err) => {
                tracing::warn!(%key, error = %err, "Format update failed");
                return SaveOutcome {
                    format: FormatSaveResult::Failed(err),
                    counter: OverrideResult::Skipped,
                };
            }
        }
    };

    let counter = match editor.counter_override().payload() {
        None => OverrideResult::NotRequested,
        Some(payload) => match gateway.set_initial(key, payload).await {
            Ok(record) => OverrideResult::Applied(record),
            Err(err) => {
                tracing::warn!(%key, error = %err, "Counter override failed");
                OverrideResult::Failed(err)
            }
        },
    };

    SaveOutcome { format, counter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLevel;
    use crate::testing::{Call, RecordingGateway, YEAR};
    use shared::models::{DocumentType, FolioSequence, SetInitialFolio};

    fn editor_for(gateway: &RecordingGateway) -> FormatEditor {
        FormatEditor::open(&gateway.stored(DocumentType::Invoice))
    }

    #[tokio::test]
    async fn patch_then_override() {
        let gateway = RecordingGateway::seeded();
        let mut editor = editor_for(&gateway);
        editor.draft.padding = "4".into();
        editor.draft.next_folio = "100".into();

        let outcome = save_row::<FolioSequence, _>(&gateway, &DocumentType::Invoice, &editor).await;
        assert!(outcome.is_success());

        let writes = gateway.writes();
        assert_eq!(writes.len(), 2);
        assert!(matches!(writes[0], Call::UpdateFormat(DocumentType::Invoice, _)));
        assert_eq!(
            writes[1],
            Call::SetInitial(DocumentType::Invoice, SetInitialFolio { current_sequence: 99 })
        );
        let latest = outcome.latest().unwrap();
        assert_eq!(latest.counter.current_sequence, 99);
        assert_eq!(latest.next_folio, "FAC-0100");
    }

    #[tokio::test]
    async fn blank_override_sends_nothing() {
        for raw in ["", "0", "-3", "x"] {
            let gateway = RecordingGateway::seeded();
            let mut editor = editor_for(&gateway);
            editor.draft.next_folio = raw.into();

            let outcome = save_row::<FolioSequence, _>(&gateway, &DocumentType::Invoice, &editor).await;
            assert!(matches!(outcome.format, FormatSaveResult::Unchanged));
            assert!(matches!(outcome.counter, OverrideResult::NotRequested));
            assert!(gateway.writes().is_empty(), "input {raw:?}");
        }
    }

    #[tokio::test]
    async fn failed_patch_skips_override() {
        let gateway = RecordingGateway {
            fail_update: true,
            ..RecordingGateway::seeded()
        };
        let mut editor = editor_for(&gateway);
        editor.draft.prefix = "FE".into();
        editor.draft.next_folio = "10".into();

        let outcome = save_row::<FolioSequence, _>(&gateway, &DocumentType::Invoice, &editor).await;
        assert!(matches!(outcome.format, FormatSaveResult::Failed(_)));
        assert!(matches!(outcome.counter, OverrideResult::Skipped));
        assert_eq!(gateway.writes().len(), 1);
        assert!(outcome.notification(&DocumentType::Invoice).is_error());
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_server() {
        let gateway = RecordingGateway::seeded();
        let mut editor = editor_for(&gateway);
        editor.draft.prefix = "".into();
        editor.draft.next_folio = "5".into();

        let outcome = save_row::<FolioSequence, _>(&gateway, &DocumentType::Invoice, &editor).await;
        assert!(matches!(outcome.format, FormatSaveResult::Rejected(_)));
        assert!(gateway.writes().is_empty());
    }

    #[tokio::test]
    async fn override_failure_is_partial_success() {
        let gateway = RecordingGateway {
            fail_override: true,
            ..RecordingGateway::seeded()
        };
        let mut editor = editor_for(&gateway);
        editor.draft.padding = "4".into();
        editor.draft.next_folio = "100".into();

        let outcome = save_row::<FolioSequence, _>(&gateway, &DocumentType::Invoice, &editor).await;
        assert!(outcome.is_partial());
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.notification(&DocumentType::Invoice).level,
            NotificationLevel::Warning
        );

        let stored = gateway.stored(DocumentType::Invoice);
        assert_eq!(stored.format.padding, 4);
        assert_eq!(stored.counter.current_sequence, 41);
        assert_eq!(stored.preview(YEAR), "FAC-0042");
    }

    #[tokio::test]
    async fn override_alone_failing_is_a_plain_failure() {
        let gateway = RecordingGateway {
            fail_override: true,
            ..RecordingGateway::seeded()
        };
        let mut editor = editor_for(&gateway);
        editor.draft.next_folio = "100".into();

        let outcome = save_row::<FolioSequence, _>(&gateway, &DocumentType::Invoice, &editor).await;
        assert!(matches!(outcome.format, FormatSaveResult::Unchanged));
        assert!(!outcome.is_partial());
        assert!(!outcome.is_success());
        assert!(!outcome.wrote_anything());

        let notification = outcome.notification(&DocumentType::Invoice);
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(!notification.message.contains("saved"));
    }
}
