//! Selection store - which catalog options are currently chosen

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{MultiSelectError, Result};

/// Options pre-selected when no seed is configured
pub const DEFAULT_SELECTED: &[&str] = &["Orange", "Green", "Red"];

/// Outcome of a single toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggled {
    Added,
    Removed,
}

/// Selection set over a fixed catalog.
///
/// Selected labels are kept in insertion order; every member is a catalog
/// option. The error condition is derived from the set on each query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    catalog: Catalog,
    selected: Vec<String>,
}

impl SelectionStore {
    pub fn new<I, S>(catalog: Catalog, seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self {
            catalog,
            selected: Vec::new(),
        };

        for label in seed {
            let label = label.into();
            store.check_known(&label)?;
            if !store.selected.contains(&label) {
                store.selected.push(label);
            }
        }

        Ok(store)
    }

    /// Flip membership of `option`
    pub fn toggle(&mut self, option: &str) -> Result<Toggled> {
        self.check_known(option)?;

        if let Some(index) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(index);
            return Ok(Toggled::Removed);
        }

        self.selected.push(option.to_string());
        Ok(Toggled::Added)
    }

    /// Select every catalog option, in catalog order
    pub fn select_all(&mut self) {
        self.selected = self.catalog.iter().map(str::to_string).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Nothing selected
    pub fn has_error(&self) -> bool {
        self.count() == 0
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn check_known(&self, option: &str) -> Result<()> {
        if self.catalog.contains(option) {
            return Ok(());
        }
        Err(MultiSelectError::UnknownOption(option.to_string()))
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            selected: DEFAULT_SELECTED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let store = SelectionStore::default();
        assert_eq!(store.selected(), ["Orange", "Green", "Red"]);
        assert_eq!(store.count(), 3);
        assert!(!store.has_error());
    }

    #[test]
    fn test_toggle_scenario() {
        let mut store = SelectionStore::default();

        assert_eq!(store.toggle("Orange").unwrap(), Toggled::Removed);
        assert_eq!(store.selected(), ["Green", "Red"]);
        assert!(!store.has_error());

        store.toggle("Green").unwrap();
        store.toggle("Red").unwrap();
        assert!(store.selected().is_empty());
        assert!(store.has_error());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut store = SelectionStore::default();
        let before = store.clone();

        for option in ["Blue", "Orange", "Pink"] {
            store.toggle(option).unwrap();
            store.toggle(option).unwrap();
            assert_eq!(store.is_selected(option), before.is_selected(option));
        }
    }

    #[test]
    fn test_toggle_parity_matches_call_count() {
        let mut store = SelectionStore::new(Catalog::default(), Vec::<String>::new()).unwrap();
        let calls = ["Red", "Blue", "Red", "Pink", "Red", "Blue", "Yellow"];
        for option in calls {
            store.toggle(option).unwrap();
        }

        for option in Catalog::default().iter() {
            let odd = calls.iter().filter(|c| **c == option).count() % 2 == 1;
            assert_eq!(store.is_selected(option), odd, "option {option}");
        }
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_toggle_only_affects_target() {
        let mut store = SelectionStore::default();
        store.toggle("Yellow").unwrap();
        assert!(store.is_selected("Orange"));
        assert!(store.is_selected("Green"));
        assert!(store.is_selected("Red"));
        assert!(store.is_selected("Yellow"));
        assert!(!store.is_selected("Blue"));
    }

    #[test]
    fn test_unknown_option_rejected_without_change() {
        let mut store = SelectionStore::default();
        let err = store.toggle("Black").unwrap_err();
        assert!(matches!(err, MultiSelectError::UnknownOption(o) if o == "Black"));
        assert_eq!(store, SelectionStore::default());
    }

    #[test]
    fn test_seed_must_be_in_catalog() {
        let catalog = Catalog::new(["a", "b"]).unwrap();
        assert!(SelectionStore::new(catalog.clone(), ["a", "c"]).is_err());

        let store = SelectionStore::new(catalog, ["b", "b"]).unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut store = SelectionStore::default();
        store.select_all();
        assert_eq!(store.count(), 7);
        assert_eq!(store.selected()[0], "Orange");
        assert_eq!(store.selected()[6], "Pink");

        store.clear();
        assert!(store.has_error());
    }
}
