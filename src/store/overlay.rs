//! Edit overlay: unsaved per-record field edits, keyed by record id.
//!
//! At most one record is in edit mode at a time. Starting an edit on a
//! second record silently abandons the first record's staged fields; the
//! original never prompts to save them. Entries are created lazily on the
//! first staged field and destroyed on save-success or cancel.

use std::collections::HashMap;

use crate::models::{FieldPatch, RecordId};

#[derive(Debug, Clone, Default)]
pub struct EditOverlay {
    /// The record currently in edit mode, if any.
    editing: Option<RecordId>,
    entries: HashMap<RecordId, FieldPatch>,
}

impl EditOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    /// Viewing -> Editing. Any previous record's edit mode and staged
    /// fields are dropped.
    pub fn begin_edit(&mut self, id: RecordId) {
        if let Some(previous) = self.editing.take() {
            if previous != id {
                self.entries.remove(&previous);
            }
        }
        self.editing = Some(id);
    }

    /// Stages a field override on the record currently in edit mode.
    /// Returns `false` (and stages nothing) when no edit is active.
    pub fn stage(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        match &self.editing {
            Some(id) => {
                self.entries.entry(id.clone()).or_default().set(field, value);
                true
            }
            None => false,
        }
    }

    /// Staged overrides for a record, if any.
    pub fn entry(&self, id: &RecordId) -> Option<&FieldPatch> {
        self.entries.get(id)
    }

    /// Editing -> Viewing without saving; staged fields are discarded.
    pub fn cancel(&mut self) {
        if let Some(id) = self.editing.take() {
            self.entries.remove(&id);
        }
    }

    /// Removes a record's entry and, if it was the one being edited, exits
    /// edit mode. Called on save-success and when the record leaves the
    /// snapshot.
    pub fn clear(&mut self, id: &RecordId) {
        self.entries.remove(id);
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer_fields;

    #[test]
    fn test_begin_edit_sets_editing() {
        let mut overlay = EditOverlay::new();
        assert_eq!(overlay.editing(), None);

        overlay.begin_edit(RecordId::from("1"));
        assert!(overlay.is_editing(&RecordId::from("1")));
        // No entry until a field is staged.
        assert!(overlay.entry(&RecordId::from("1")).is_none());
    }

    #[test]
    fn test_stage_requires_active_edit() {
        let mut overlay = EditOverlay::new();
        assert!(!overlay.stage(customer_fields::NAME, "Bobby"));

        overlay.begin_edit(RecordId::from("1"));
        assert!(overlay.stage(customer_fields::NAME, "Bobby"));
        let entry = overlay.entry(&RecordId::from("1")).unwrap();
        assert_eq!(entry.get(customer_fields::NAME), Some("Bobby"));
    }

    #[test]
    fn test_switching_edit_abandons_previous_entry() {
        let mut overlay = EditOverlay::new();
        overlay.begin_edit(RecordId::from("1"));
        overlay.stage(customer_fields::NAME, "Bobby");

        overlay.begin_edit(RecordId::from("2"));
        assert!(overlay.is_editing(&RecordId::from("2")));
        assert!(!overlay.is_editing(&RecordId::from("1")));
        assert!(overlay.entry(&RecordId::from("1")).is_none());
    }

    #[test]
    fn test_begin_edit_same_record_keeps_entry() {
        let mut overlay = EditOverlay::new();
        overlay.begin_edit(RecordId::from("1"));
        overlay.stage(customer_fields::NAME, "Bobby");

        overlay.begin_edit(RecordId::from("1"));
        assert!(overlay.entry(&RecordId::from("1")).is_some());
    }

    #[test]
    fn test_cancel_discards_entry() {
        let mut overlay = EditOverlay::new();
        overlay.begin_edit(RecordId::from("1"));
        overlay.stage(customer_fields::NAME, "Bobby");

        overlay.cancel();
        assert_eq!(overlay.editing(), None);
        assert!(overlay.entry(&RecordId::from("1")).is_none());
    }

    #[test]
    fn test_clear_exits_edit_mode_for_that_record_only() {
        let mut overlay = EditOverlay::new();
        overlay.begin_edit(RecordId::from("1"));
        overlay.stage(customer_fields::NAME, "Bobby");

        overlay.clear(&RecordId::from("2"));
        assert!(overlay.is_editing(&RecordId::from("1")));

        overlay.clear(&RecordId::from("1"));
        assert_eq!(overlay.editing(), None);
        assert!(overlay.entry(&RecordId::from("1")).is_none());
    }
}
