//! Client-side collection manager.
//!
//! `CollectionStore` owns the local snapshot of one remote collection and
//! mediates every network-visible state change:
//!
//! 1. `load` replaces the snapshot with the server's records
//! 2. staged edits live in the [`EditOverlay`] until saved or cancelled
//! 3. [`project`] derives the filtered/sorted display rows
//! 4. `register`/`save`/`delete` post mutations and fold successes back
//!    into the snapshot; failures leave it untouched and set the status
//!
//! Every mutation resolves to exactly one status message. Load failures
//! are the deliberate exception: they are logged and dropped, so a dead
//! server degrades to an empty table instead of an error banner. Nothing
//! is retried and in-flight requests are never cancelled; an operation
//! resolving late is applied to whatever state exists by then.

mod overlay;
mod projection;

pub use overlay::EditOverlay;
pub use projection::{project, DisplayWindow, SortOrder, ViewState};

use thiserror::Error;

use crate::api::{ApiClient, ApiError, CollectionQuery};
use crate::models::{FieldPatch, RecordId, Resource};

const REGISTRATION_REJECTED: &str = "Registration failed. Please try again.";
const REGISTRATION_ERROR: &str = "An error occurred. Please try again.";

/// Errors surfaced to the caller. Network outcomes are also mirrored into
/// the status message before the error is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} is not in the loaded collection")]
    UnknownRecord(RecordId),

    #[error("no record is in edit mode")]
    NoActiveEdit,

    #[error("record {0} is not in edit mode")]
    NotEditing(RecordId),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Per-resource variant knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Bounded window: after a successful create, trim the snapshot to the
    /// last `window` entries.
    pub window: Option<usize>,

    /// On load with a `limit`, keep the trailing `limit` records of the
    /// response and reverse them. Emulates newest-first ordering when the
    /// server cannot sort.
    pub tail_window: bool,
}

/// Manages the local copy of one remote record collection.
///
/// Generic over the record shape; instantiated once per resource. All
/// state transitions rebuild the snapshot rather than patching it in
/// place, mirroring the reconciliation each server response implies.
#[derive(Debug)]
pub struct CollectionStore<R: Resource> {
    client: ApiClient,
    options: StoreOptions,
    snapshot: Vec<R>,
    overlay: EditOverlay,
    draft: FieldPatch,
    status: Option<String>,
}

impl<R: Resource> CollectionStore<R> {
    pub fn new(client: ApiClient) -> Self {
        Self::with_options(client, StoreOptions::default())
    }

    pub fn with_options(client: ApiClient, options: StoreOptions) -> Self {
        Self {
            client,
            options,
            snapshot: Vec::new(),
            overlay: EditOverlay::new(),
            draft: FieldPatch::new(),
            status: None,
        }
    }

    /// Last-known server state.
    pub fn snapshot(&self) -> &[R] {
        &self.snapshot
    }

    pub fn overlay(&self) -> &EditOverlay {
        &self.overlay
    }

    /// Outcome of the most recent mutation. Sticky: overwritten by the
    /// next mutation, never cleared.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn draft(&self) -> &FieldPatch {
        &self.draft
    }

    /// Sets a field on the creation draft.
    pub fn set_draft_field(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Display rows for the current snapshot, overlay and view.
    pub fn rows(&self, view: &ViewState) -> Vec<R> {
        project(&self.snapshot, &self.overlay, view)
    }

    /// Replaces the snapshot with the server's collection.
    ///
    /// Failures (network or decode) are logged and otherwise ignored: the
    /// snapshot keeps its previous contents and no status is set.
    pub async fn load(&mut self, query: &CollectionQuery) {
        match self.client.fetch::<R>(query).await {
            Ok(mut records) => {
                if self.options.tail_window {
                    if let Some(limit) = query.limit {
                        if records.len() > limit {
                            records = records.split_off(records.len() - limit);
                        }
                        records.reverse();
                    }
                }
                self.snapshot = records;
            }
            Err(err) => {
                tracing::warn!("Failed to load {}: {}", R::PATH, err);
            }
        }
    }

    /// POSTs the draft. On success the server's record (with its assigned
    /// id) is appended to the snapshot, the bounded window is enforced and
    /// the draft is reset. On failure snapshot and draft are unchanged.
    pub async fn register(&mut self) -> Result<(), StoreError> {
        match self.client.create::<R>(&self.draft).await {
            Ok(record) => {
                let mut next = self.snapshot.clone();
                next.push(record);
                if let Some(window) = self.options.window {
                    if next.len() > window {
                        next = next.split_off(next.len() - window);
                    }
                }
                self.snapshot = next;
                self.status = Some(format!("{} registered successfully!", R::LABEL));
                self.draft = FieldPatch::new();
                Ok(())
            }
            Err(err) => {
                let message = if err.is_rejection() {
                    REGISTRATION_REJECTED
                } else {
                    REGISTRATION_ERROR
                };
                self.status = Some(message.to_string());
                Err(StoreError::Api(err))
            }
        }
    }

    /// Puts a record into edit mode. Any other record's edit mode is
    /// silently dropped, staged fields included.
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<(), StoreError> {
        if !self.snapshot.iter().any(|record| record.id() == id) {
            return Err(StoreError::UnknownRecord(id.clone()));
        }
        self.overlay.begin_edit(id.clone());
        Ok(())
    }

    /// Stages a field override on the record currently in edit mode.
    pub fn stage(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        if self.overlay.stage(field, value) {
            Ok(())
        } else {
            Err(StoreError::NoActiveEdit)
        }
    }

    /// Exits edit mode discarding staged fields. No network call.
    pub fn cancel(&mut self) {
        self.overlay.cancel();
    }

    /// PATCHes the staged fields for `id`. On success the patch is
    /// shallow-merged into the snapshot record and edit mode ends. On
    /// failure the record stays in edit mode with its staged fields
    /// intact, so the user can retry or cancel.
    pub async fn save(&mut self, id: &RecordId) -> Result<(), StoreError> {
        if !self.overlay.is_editing(id) {
            return Err(StoreError::NotEditing(id.clone()));
        }
        let patch = self.overlay.entry(id).cloned().unwrap_or_default();

        match self.client.update::<R>(id, &patch).await {
            Ok(()) => {
                self.snapshot = self
                    .snapshot
                    .iter()
                    .map(|record| {
                        if record.id() == id {
                            let mut merged = record.clone();
                            merged.apply(&patch);
                            merged
                        } else {
                            record.clone()
                        }
                    })
                    .collect();
                self.overlay.clear(id);
                self.status = Some(format!("{} updated successfully!", R::LABEL));
                Ok(())
            }
            Err(err) => {
                self.status = Some(format!("Failed to update {}", R::LABEL.to_lowercase()));
                Err(StoreError::Api(err))
            }
        }
    }

    /// DELETEs the record. On success it is removed from the snapshot;
    /// deleting an id the server no longer has reports failure every time
    /// and never alters the snapshot.
    pub async fn delete(&mut self, id: &RecordId) -> Result<(), StoreError> {
        match self.client.delete::<R>(id).await {
            Ok(()) => {
                self.snapshot = self
                    .snapshot
                    .iter()
                    .filter(|record| record.id() != id)
                    .cloned()
                    .collect();
                // A deleted record cannot stay in edit mode.
                self.overlay.clear(id);
                self.status = Some(format!("{} deleted successfully!", R::LABEL));
                Ok(())
            }
            Err(err) => {
                self.status = Some(format!("Failed to delete {}", R::LABEL.to_lowercase()));
                Err(StoreError::Api(err))
            }
        }
    }
}
