//! Filter/sort projection: derives the display sequence from the snapshot
//! and the edit overlay.
//!
//! The projection is a pure function; it never mutates store state. Overlay
//! overrides win over snapshot values, the search filter runs before the
//! sort, and the display window is applied last by the caller.

use std::cmp::Ordering;

use super::overlay::EditOverlay;
use crate::models::Resource;

/// Sort direction for the primary text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Query-parameter form understood by the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-controlled view parameters, recomputed per render rather than
/// stored in the collection manager.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Case-insensitive substring filter on the primary text field.
    pub search: String,
    pub order: SortOrder,
}

/// Optional cap on the displayed sequence, applied after filter and sort
/// irrespective of either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayWindow {
    #[default]
    All,
    First(usize),
    Last(usize),
}

impl DisplayWindow {
    pub fn apply<T>(&self, mut rows: Vec<T>) -> Vec<T> {
        match *self {
            DisplayWindow::All => rows,
            DisplayWindow::First(n) => {
                rows.truncate(n);
                rows
            }
            DisplayWindow::Last(n) => {
                if rows.len() > n {
                    rows.split_off(rows.len() - n)
                } else {
                    rows
                }
            }
        }
    }
}

/// Derives the display rows for a snapshot.
///
/// Each row is the snapshot record with its overlay entry (if any) applied
/// on top, so unsaved edits are visible without touching the snapshot.
/// Records whose primary field is empty match only an empty search.
pub fn project<R: Resource>(snapshot: &[R], overlay: &EditOverlay, view: &ViewState) -> Vec<R> {
    let mut rows: Vec<R> = snapshot
        .iter()
        .map(|record| match overlay.entry(record.id()) {
            Some(patch) => {
                let mut row = record.clone();
                row.apply(patch);
                row
            }
            None => record.clone(),
        })
        .collect();

    if !view.search.is_empty() {
        let needle = view.search.to_lowercase();
        rows.retain(|row| row.primary_text().to_lowercase().contains(&needle));
    }

    rows.sort_by(|a, b| {
        let ordering = compare_primary(a.primary_text(), b.primary_text());
        match view.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    rows
}

/// Case-insensitive comparison with a raw-string tie-break, so the order
/// is total even for names differing only in case.
fn compare_primary(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{customer_fields, Customer, RecordId};

    fn snapshot() -> Vec<Customer> {
        vec![
            Customer::new("1", "Bob"),
            Customer::new("2", "alice"),
            Customer::new("3", "Carol"),
        ]
    }

    fn names(rows: &[Customer]) -> Vec<&str> {
        rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_identity_projection() {
        let snapshot = vec![Customer::new("1", "Bob")];
        let rows = project(&snapshot, &EditOverlay::new(), &ViewState::default());
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn test_overlay_override_wins() {
        let snapshot = vec![Customer::new("1", "Bob").with_country("Norway")];
        let mut overlay = EditOverlay::new();
        overlay.begin_edit(RecordId::from("1"));
        overlay.stage(customer_fields::NAME, "Bobby");

        let rows = project(&snapshot, &overlay, &ViewState::default());
        assert_eq!(rows[0].name, "Bobby");
        // Unstaged fields still come from the snapshot.
        assert_eq!(rows[0].country, "Norway");
        // The snapshot itself is untouched.
        assert_eq!(snapshot[0].name, "Bob");
    }

    #[test]
    fn test_cancel_reverts_to_snapshot_value() {
        let snapshot = vec![Customer::new("1", "Bob")];
        let mut overlay = EditOverlay::new();
        overlay.begin_edit(RecordId::from("1"));
        overlay.stage(customer_fields::NAME, "Bobby");
        overlay.cancel();

        let rows = project(&snapshot, &overlay, &ViewState::default());
        assert_eq!(rows[0].name, "Bob");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let snapshot = vec![
            Customer::new("1", "ABC"),
            Customer::new("2", "xab c"),
            Customer::new("3", "zzz"),
        ];
        let view = ViewState {
            search: "ab".to_string(),
            ..ViewState::default()
        };
        let rows = project(&snapshot, &EditOverlay::new(), &view);
        assert_eq!(names(&rows), vec!["ABC", "xab c"]);
    }

    #[test]
    fn test_missing_primary_field_excluded_from_search() {
        let snapshot = vec![Customer::new("1", "Bob"), Customer::new("2", "")];

        let empty = ViewState::default();
        assert_eq!(project(&snapshot, &EditOverlay::new(), &empty).len(), 2);

        let searching = ViewState {
            search: "b".to_string(),
            ..ViewState::default()
        };
        let rows = project(&snapshot, &EditOverlay::new(), &searching);
        assert_eq!(names(&rows), vec!["Bob"]);
    }

    #[test]
    fn test_sort_orders_and_toggle_reverses() {
        let ascending = project(
            &snapshot(),
            &EditOverlay::new(),
            &ViewState {
                order: SortOrder::Ascending,
                ..ViewState::default()
            },
        );
        assert_eq!(names(&ascending), vec!["alice", "Bob", "Carol"]);

        let descending = project(
            &snapshot(),
            &EditOverlay::new(),
            &ViewState {
                order: SortOrder::Descending,
                ..ViewState::default()
            },
        );
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_sort_applies_to_filtered_set() {
        let snapshot = vec![
            Customer::new("1", "Beta"),
            Customer::new("2", "alpha"),
            Customer::new("3", "Ignored"),
        ];
        let view = ViewState {
            search: "a".to_string(),
            order: SortOrder::Ascending,
        };
        let rows = project(&snapshot, &EditOverlay::new(), &view);
        assert_eq!(names(&rows), vec!["alpha", "Beta"]);
    }

    #[test]
    fn test_display_window() {
        let rows = vec![1, 2, 3, 4, 5];
        assert_eq!(DisplayWindow::All.apply(rows.clone()), vec![1, 2, 3, 4, 5]);
        assert_eq!(DisplayWindow::First(2).apply(rows.clone()), vec![1, 2]);
        assert_eq!(DisplayWindow::Last(2).apply(rows.clone()), vec![4, 5]);
        assert_eq!(DisplayWindow::Last(9).apply(rows), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_order_query_form() {
        assert_eq!(SortOrder::Ascending.as_str(), "asc");
        assert_eq!(SortOrder::Descending.to_string(), "desc");
    }
}
