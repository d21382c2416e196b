//! Widget State Records
//!
//! Explicit per-widget state for lazy-loading panels, selection sets and
//! submenu expansion. Kept out of the DOM so the contracts are testable
//! without a browser.

use std::collections::BTreeSet;

use crate::models::Pharmacy;

/// Fetch lifecycle of a lazily loaded panel.
///
/// `Ready` is terminal: there is no invalidation path, so a widget fetches at
/// most once. `Failed` allows a user-triggered retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    /// Try to start a fetch. Returns `true` when the caller should issue the
    /// request; `Loading` and `Ready` refuse re-entry.
    pub fn begin(&mut self) -> bool {
        match self {
            LoadState::Idle | LoadState::Failed => {
                *self = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Ready(_) => false,
        }
    }

    pub fn ready(&mut self, value: T) {
        *self = LoadState::Ready(value);
    }

    pub fn fail(&mut self) {
        *self = LoadState::Failed;
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Which input kind a dropdown renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Radio inputs, at most one selected
    Single,
    /// Checkbox inputs
    Multiple,
}

/// Checked-input set of one dropdown widget
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    kind: SelectionKind,
    ids: BTreeSet<u32>,
}

impl Selection {
    pub fn new(kind: SelectionKind) -> Self {
        Self {
            kind,
            ids: BTreeSet::new(),
        }
    }

    /// Apply one input change event.
    pub fn set_checked(&mut self, id: u32, checked: bool) {
        match self.kind {
            SelectionKind::Single => {
                self.ids.clear();
                if checked {
                    self.ids.insert(id);
                }
            }
            SelectionKind::Multiple => {
                if checked {
                    self.ids.insert(id);
                } else {
                    self.ids.remove(&id);
                }
            }
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Caption for the trigger button: comma-joined labels of the checked
    /// entries in list order, or the placeholder when nothing is checked.
    pub fn caption(&self, entities: &[Pharmacy], placeholder: &str) -> String {
        let labels: Vec<&str> = entities
            .iter()
            .filter(|p| self.ids.contains(&p.id))
            .map(|p| p.name.as_str())
            .collect();
        if labels.is_empty() {
            placeholder.to_string()
        } else {
            labels.join(", ")
        }
    }
}

/// Open/closed tracking for one group of sibling submenus.
///
/// An exclusive group closes every sibling when one submenu opens; a
/// non-exclusive group toggles each member independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionState<K: Ord> {
    exclusive: bool,
    open: BTreeSet<K>,
}

impl<K: Ord> ExpansionState<K> {
    pub fn new(exclusive: bool) -> Self {
        Self {
            exclusive,
            open: BTreeSet::new(),
        }
    }

    /// Flip one submenu. Returns whether it is open afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.open.remove(&key) {
            return false;
        }
        if self.exclusive {
            self.open.clear();
        }
        self.open.insert(key);
        true
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pharmacy(id: u32, name: &str) -> Pharmacy {
        Pharmacy {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn begin_guards_reentry() {
        let mut state = LoadState::<Vec<Pharmacy>>::Idle;
        assert!(state.begin());
        // A second trigger while the request is in flight must not re-fetch
        assert!(!state.begin());
        state.ready(vec![pharmacy(1, "Central")]);
        assert!(!state.begin());
    }

    #[test]
    fn ready_is_terminal_even_when_empty() {
        let mut state = LoadState::<Vec<Pharmacy>>::Idle;
        assert!(state.begin());
        state.ready(Vec::new());
        assert!(state.is_ready());
        assert!(!state.begin());
    }

    #[test]
    fn failure_allows_retry() {
        let mut state = LoadState::<Vec<Pharmacy>>::Idle;
        assert!(state.begin());
        state.fail();
        assert_eq!(state, LoadState::Failed);
        assert!(state.begin());
    }

    #[test]
    fn single_selection_replaces() {
        let mut sel = Selection::new(SelectionKind::Single);
        sel.set_checked(1, true);
        sel.set_checked(2, true);
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(2));
        assert!(!sel.contains(1));
    }

    #[test]
    fn single_selection_can_be_cleared() {
        let mut sel = Selection::new(SelectionKind::Single);
        sel.set_checked(1, true);
        sel.set_checked(1, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn multiple_selection_accumulates_and_unchecks() {
        let mut sel = Selection::new(SelectionKind::Multiple);
        sel.set_checked(1, true);
        sel.set_checked(2, true);
        assert_eq!(sel.len(), 2);
        sel.set_checked(1, false);
        assert!(!sel.contains(1));
        assert!(sel.contains(2));
    }

    #[test]
    fn caption_joins_labels_in_list_order() {
        let list = vec![
            pharmacy(3, "Downtown"),
            pharmacy(1, "Airport"),
            pharmacy(2, "Harbor"),
        ];
        let mut sel = Selection::new(SelectionKind::Multiple);
        sel.set_checked(2, true);
        sel.set_checked(3, true);
        // List order, not click order
        assert_eq!(sel.caption(&list, "Select Pharmacy"), "Downtown, Harbor");
    }

    #[test]
    fn caption_falls_back_to_placeholder() {
        let list = vec![pharmacy(1, "Airport")];
        let mut sel = Selection::new(SelectionKind::Multiple);
        sel.set_checked(1, true);
        sel.set_checked(1, false);
        assert_eq!(sel.caption(&list, "Select Pharmacy"), "Select Pharmacy");
    }

    #[test]
    fn exclusive_expansion_closes_siblings() {
        let mut exp = ExpansionState::new(true);
        assert!(exp.toggle("accounts"));
        assert!(exp.toggle("reports"));
        assert!(exp.is_open(&"reports"));
        assert!(!exp.is_open(&"accounts"));
    }

    #[test]
    fn exclusive_expansion_still_toggles_closed() {
        let mut exp = ExpansionState::new(true);
        assert!(exp.toggle("accounts"));
        assert!(!exp.toggle("accounts"));
        assert!(!exp.is_open(&"accounts"));
    }

    #[test]
    fn non_exclusive_expansion_is_independent() {
        let mut exp = ExpansionState::new(false);
        assert!(exp.toggle(7u32));
        assert!(exp.toggle(9));
        assert!(exp.is_open(&7) && exp.is_open(&9));
        assert!(!exp.toggle(7));
        assert!(!exp.is_open(&7));
        assert!(exp.is_open(&9));
    }
}
