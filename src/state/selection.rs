//! The set of trends the user has checked.
//!
//! Owned by [`crate::app::App`]. Everything else gets `&SelectionStore`;
//! mutation goes through the owner's `toggle_trend` / `clear_selection`.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: HashSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids, sorted so requests are deterministic.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Drop every id not in `known`. Returns how many were dropped.
    pub fn retain_known<'a, I>(&mut self, known: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: HashSet<&str> = known.into_iter().collect();
        let before = self.ids.len();
        self.ids.retain(|id| known.contains(id.as_str()));
        before - self.ids.len()
    }
}
