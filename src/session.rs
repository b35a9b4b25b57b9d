//! The owning state of one upload workspace.
//!
//! A [`Session`] confines everything the workflow mutates: the cached record
//! list, the pending (validated, not yet uploaded) selection, and the preview
//! dialog. Validation and preview planning stay pure; the network lives
//! behind the [`Transport`] port and user feedback behind the [`Notifier`]
//! port, so the whole workflow runs unchanged against in-memory stubs.
//!
//! Causality, not concurrency: a list refresh happens only after an upload
//! or delete has settled, and a failed fetch keeps the stale list.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::Transport;
use crate::media::preview::{self, PreviewPlan};
use crate::media::schema::{Candidate, MediaRecord};
use crate::media::validate::validate_batch;
use crate::notify::{Notice, Notifier};

/// Preview overlay state: which record is open, if any.
///
/// Opened by the view action, cleared on close.
#[derive(Debug, Clone, Default)]
pub struct DialogState {
    target: Option<MediaRecord>,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&MediaRecord> {
        self.target.as_ref()
    }
}

pub struct Session {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    origin: String,
    files: Vec<MediaRecord>,
    selection: Option<Vec<Candidate>>,
    dialog: DialogState,
}

impl Session {
    /// `origin` is the backend origin used to resolve preview URLs; it must
    /// match what the transport talks to.
    pub fn new(
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            notifier,
            origin: origin.into(),
            files: Vec::new(),
            selection: None,
            dialog: DialogState::default(),
        }
    }

    /// The record list as of the last successful refresh.
    pub fn files(&self) -> &[MediaRecord] {
        &self.files
    }

    /// The pending selection, if a batch has been accepted.
    pub fn selection(&self) -> Option<&[Candidate]> {
        self.selection.as_deref()
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Look up a cached record by id.
    pub fn record(&self, id: u64) -> Option<&MediaRecord> {
        self.files.iter().find(|file| file.id == id)
    }

    /// Fetch the server's record list and replace the cached copy.
    ///
    /// On failure the stale list stays and no notice fires; the failure is
    /// only logged. Returns whether the fetch succeeded.
    pub async fn refresh(&mut self) -> bool {
        match self.transport.list().await {
            Ok(files) => {
                debug!(count = files.len(), "record list refreshed");
                self.files = files;
                true
            }
            Err(err) => {
                warn!(error = %err, "could not fetch the record list; keeping the stale copy");
                false
            }
        }
    }

    /// Validate a batch and, if clean, make it the pending selection.
    ///
    /// A rejected batch is discarded in full, one notice per offending file,
    /// and whatever selection existed before stays untouched.
    pub fn select(&mut self, batch: Vec<Candidate>) -> bool {
        match validate_batch(&batch) {
            Ok(()) => {
                debug!(count = batch.len(), "batch accepted as pending selection");
                self.selection = Some(batch);
                true
            }
            Err(rejections) => {
                for rejection in &rejections {
                    self.notifier.notify(Notice::error(rejection.to_string()));
                }
                false
            }
        }
    }

    /// Upload the pending selection as one multipart request.
    ///
    /// On success: success notice, selection cleared, list refreshed. On any
    /// failure, HTTP-level or network-level, the selection is retained so the
    /// upload can be retried without re-picking.
    pub async fn upload(&mut self) -> bool {
        let Some(batch) = self.selection.as_ref().filter(|batch| !batch.is_empty()) else {
            self.notifier.notify(Notice::error("no files selected"));
            return false;
        };

        let count = batch.len();
        let result = self.transport.upload(batch).await;
        match result {
            Ok(()) => {
                info!(count, "upload complete");
                self.notifier.notify(Notice::success(format!(
                    "uploaded {count} file{}",
                    if count == 1 { "" } else { "s" }
                )));
                self.selection = None;
                self.refresh().await;
                true
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::error(format!("upload failed: {err}")));
                false
            }
        }
    }

    /// Delete one record by id, then refresh the list on success.
    pub async fn delete(&mut self, id: u64) -> bool {
        match self.transport.delete(id).await {
            Ok(()) => {
                info!(id, "record deleted");
                self.notifier
                    .notify(Notice::success(format!("file {id} removed")));
                self.refresh().await;
                true
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::error(format!("could not remove file {id}: {err}")));
                false
            }
        }
    }

    /// Open the preview overlay for a cached record.
    pub fn open_preview(&mut self, id: u64) -> bool {
        match self.record(id).cloned() {
            Some(record) => {
                self.dialog = DialogState {
                    target: Some(record),
                };
                true
            }
            None => {
                self.notifier
                    .notify(Notice::error(format!("no file with id {id}")));
                false
            }
        }
    }

    pub fn close_preview(&mut self) {
        self.dialog = DialogState::default();
    }

    /// Preview plan for the record currently shown, if the overlay is open.
    pub fn preview_plan(&self) -> Option<PreviewPlan> {
        self.dialog
            .target()
            .map(|record| preview::plan(record, &self.origin))
    }
}
