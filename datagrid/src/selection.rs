//! Row selection state.
//!
//! Selection is keyed by the stringified row identity so it stays stable
//! across column reorders, resizes and page changes. The original typed
//! identity is remembered so it can be reported back unchanged.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::data::RowId;

/// State of the select-all checkbox in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCheck {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheck {
    pub fn is_checked(self) -> bool {
        self == HeaderCheck::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == HeaderCheck::Indeterminate
    }
}

/// ID-based selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Currently selected keys
    selected: HashSet<String>,
    /// Typed identity for every key ever touched
    ids: HashMap<String, RowId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(&id.key())
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        self.ids.clear();
        had_any
    }

    /// Flip one row. Returns the new state.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        let key = id.key();
        self.ids.entry(key.clone()).or_insert_with(|| id.clone());
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Set every row in `ids` to `selected`. Returns `true` if anything changed.
    pub fn set_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RowId>, selected: bool) -> bool {
        let mut changed = false;
        for id in ids {
            let key = id.key();
            self.ids.entry(key.clone()).or_insert_with(|| id.clone());
            changed |= if selected {
                self.selected.insert(key)
            } else {
                self.selected.remove(&key)
            };
        }
        changed
    }

    /// Toggle every visible row as a group.
    ///
    /// If any visible row is unselected, all of them become selected;
    /// otherwise all of them are deselected. Rows outside `visible` are
    /// untouched. Returns `true` if anything changed.
    pub fn toggle_all(&mut self, visible: &[RowId]) -> bool {
        let select = !self.all_selected(visible);
        self.set_all(visible, select)
    }

    /// Whether every row in `visible` is selected. `false` for an empty page.
    pub fn all_selected(&self, visible: &[RowId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.is_selected(id))
    }

    /// Header checkbox state for the visible rows.
    pub fn header_check(&self, visible: &[RowId]) -> HeaderCheck {
        if self.all_selected(visible) {
            HeaderCheck::Checked
        } else if visible.iter().any(|id| self.is_selected(id)) {
            HeaderCheck::Indeterminate
        } else {
            HeaderCheck::Unchecked
        }
    }

    /// Selected identities, ordered by their position in `row_order`.
    ///
    /// Selected keys no longer present in `row_order` follow, sorted by key.
    pub fn selected_ids(&self, row_order: &[RowId]) -> Vec<RowId> {
        let mut seen = HashSet::new();
        let mut out: Vec<RowId> = row_order
            .iter()
            .filter(|id| {
                let key = id.key();
                self.selected.contains(&key) && seen.insert(key)
            })
            .cloned()
            .collect();

        let mut stale: Vec<&String> = self
            .selected
            .iter()
            .filter(|key| !seen.contains(*key))
            .collect();
        stale.sort();
        out.extend(stale.into_iter().filter_map(|key| self.ids.get(key).cloned()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<i64>) -> Vec<RowId> {
        range.map(RowId::Number).collect()
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut sel = Selection::new();
        let id = RowId::from("a");
        assert!(sel.toggle(&id));
        assert!(sel.is_selected(&id));
        assert!(!sel.toggle(&id));
        assert!(!sel.is_selected(&id));
    }

    #[test]
    fn test_toggle_all_visible() {
        let mut sel = Selection::new();
        let page = ids(0..5);
        sel.toggle(&page[1]);
        sel.toggle(&page[3]);
        let other_page = RowId::Number(42);
        sel.toggle(&other_page);

        assert_eq!(sel.header_check(&page), HeaderCheck::Indeterminate);
        assert!(sel.toggle_all(&page));
        assert_eq!(sel.header_check(&page), HeaderCheck::Checked);
        assert!(sel.toggle_all(&page));
        assert_eq!(sel.header_check(&page), HeaderCheck::Unchecked);
        assert!(sel.is_selected(&other_page));
    }

    #[test]
    fn test_empty_page_is_unchecked() {
        let mut sel = Selection::new();
        assert_eq!(sel.header_check(&[]), HeaderCheck::Unchecked);
        assert!(!sel.toggle_all(&[]));
    }

    #[test]
    fn test_selected_ids_keep_type_and_row_order() {
        let mut sel = Selection::new();
        let order = vec![RowId::from("x"), RowId::Number(7), RowId::from("y")];
        sel.toggle(&order[2]);
        sel.toggle(&order[1]);
        sel.toggle(&RowId::from("gone"));

        assert_eq!(
            sel.selected_ids(&order),
            vec![RowId::Number(7), RowId::from("y"), RowId::from("gone")]
        );
    }
}
