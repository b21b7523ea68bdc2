//! Expansion state store
//!
//! Tracks which branch entries currently show their children. Keyed by
//! [`NavPath`], so entries that share a label never share state.

use super::model::NavPath;
use std::collections::HashSet;

/// Set of expanded entries, owned by a single controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionStore {
    expanded: HashSet<NavPath>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `path`. Siblings are left untouched.
    ///
    /// Returns the new state (`true` = now expanded).
    pub fn toggle(&mut self, path: &NavPath) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.clone());
            true
        }
    }

    pub fn is_expanded(&self, path: &NavPath) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand(&mut self, path: NavPath) {
        self.expanded.insert(path);
    }

    /// Expand every ancestor of `path`, leaving `path` itself alone
    pub fn reveal(&mut self, path: &NavPath) {
        let mut current = path.parent();
        while let Some(ancestor) = current {
            current = ancestor.parent();
            self.expanded.insert(ancestor);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = ExpansionStore::new();
        assert_eq!(store.expanded_count(), 0);
        assert!(!store.is_expanded(&NavPath::root(0)));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        for path in [
            NavPath::root(0),
            NavPath::from_indices(vec![3, 1]),
            NavPath::from_indices(vec![7, 2, 5, 0]),
        ] {
            let mut store = ExpansionStore::new();
            store.expand(NavPath::root(9));
            let before = store.clone();

            assert!(store.toggle(&path));
            assert!(store.is_expanded(&path));
            assert!(!store.toggle(&path));
            assert_eq!(store, before);
        }
    }

    #[test]
    fn test_siblings_expand_independently() {
        let mut store = ExpansionStore::new();
        let a = NavPath::root(1);
        let b = NavPath::root(2);

        store.toggle(&a);
        store.toggle(&b);

        assert!(store.is_expanded(&a));
        assert!(store.is_expanded(&b));
        assert_eq!(store.expanded_count(), 2);
    }

    #[test]
    fn test_same_label_different_paths_do_not_collide() {
        // Sales > Returns and System > Localisation > Returns
        let sales_returns = NavPath::from_indices(vec![4, 2]);
        let localisation_returns = NavPath::from_indices(vec![7, 2, 5]);

        let mut store = ExpansionStore::new();
        store.toggle(&localisation_returns);

        assert!(store.is_expanded(&localisation_returns));
        assert!(!store.is_expanded(&sales_returns));
    }

    #[test]
    fn test_reveal_expands_ancestors_only() {
        let mut store = ExpansionStore::new();
        store.reveal(&NavPath::from_indices(vec![7, 2, 5, 0]));

        assert!(store.is_expanded(&NavPath::root(7)));
        assert!(store.is_expanded(&NavPath::from_indices(vec![7, 2])));
        assert!(store.is_expanded(&NavPath::from_indices(vec![7, 2, 5])));
        assert!(!store.is_expanded(&NavPath::from_indices(vec![7, 2, 5, 0])));
        assert_eq!(store.expanded_count(), 3);

        store.reveal(&NavPath::root(3));
        assert_eq!(store.expanded_count(), 3);
    }

    #[test]
    fn test_collapse_all() {
        let mut store = ExpansionStore::new();
        store.expand(NavPath::root(0));
        store.expand(NavPath::from_indices(vec![0, 1]));
        store.collapse_all();
        assert_eq!(store.expanded_count(), 0);
    }
}
