//! Selection State
//!
//! Tracks which university is selected, the active content section, and the
//! last query with its results. Only the selected id is persisted, through
//! the injected `KeyValueStore`.
//!
//! Transitions:
//! - `select(id)`: resolvable id → Selected, section reset to `campus_map`,
//!   query and results cleared. Unresolvable id → NoSelection.
//! - `clear()`: → NoSelection, everything derived cleared.
//! - `restore(..)`: a persisted id that no longer resolves settles into
//!   NoSelection and the stale key is removed.

use crate::lookup::UniversityDirectory;
use crate::search::{search_university, Category, SearchRequest, SearchResultSet};
use crate::storage::KeyValueStore;
use crate::types::University;
use crate::utils::text::is_blank;
use std::sync::Arc;

/// Storage key holding the selected university id.
pub const SELECTED_UNIVERSITY_KEY: &str = "selectedUniversityId";

pub struct SelectionState<S: KeyValueStore> {
    directory: Arc<UniversityDirectory>,
    store: S,
    selected: Option<String>,
    active_section: Category,
    query: String,
    results: Option<SearchResultSet>,
}

impl<S: KeyValueStore> SelectionState<S> {
    /// Start with no selection, ignoring anything persisted.
    pub fn new(directory: Arc<UniversityDirectory>, store: S) -> Self {
        Self {
            directory,
            store,
            selected: None,
            active_section: Category::default(),
            query: String::new(),
            results: None,
        }
    }

    /// Start from whatever selection the store remembers.
    pub fn restore(directory: Arc<UniversityDirectory>, store: S) -> Self {
        let mut state = Self::new(directory, store);

        if let Some(saved_id) = state.store.get(SELECTED_UNIVERSITY_KEY) {
            if state.select(&saved_id).is_none() {
                tracing::warn!(
                    "Persisted university '{}' no longer exists; starting without a selection",
                    saved_id
                );
            }
        }
        state
    }

    /// Select a university. An unknown id clears the selection instead.
    pub fn select(&mut self, university_id: &str) -> Option<&University> {
        if !self.directory.contains(university_id) {
            tracing::debug!("Cannot select unknown university '{}'", university_id);
            self.clear();
            return None;
        }

        self.selected = Some(university_id.to_string());
        self.reset_derived();
        self.persist();
        tracing::info!("Selected university '{}'", university_id);

        self.directory.get_by_id(university_id)
    }

    /// Back to the landing view.
    pub fn clear(&mut self) {
        self.selected = None;
        self.reset_derived();
        self.persist();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_university(&self) -> Option<&University> {
        self.selected
            .as_deref()
            .and_then(|id| self.directory.get_by_id(id))
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn active_section(&self) -> Category {
        self.active_section
    }

    pub fn set_active_section(&mut self, section: Category) {
        self.active_section = section;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> Option<&SearchResultSet> {
        self.results.as_ref()
    }

    /// Set the query and search immediately.
    ///
    /// Without a selection, or with a blank query, results are cleared.
    pub fn update_query(&mut self, query: &str) -> Option<&SearchResultSet> {
        self.query = query.to_string();
        self.results = match self.selected_university() {
            Some(university) if !is_blank(query) => Some(search_university(university, query)),
            _ => None,
        };
        self.results.as_ref()
    }

    /// Set the query text only; results arrive later via `accept_results`.
    ///
    /// Results for a different query text are cleared, so `results()` never
    /// describes a query other than `query()`. Returns the request to hand to
    /// a debounced search, or `None` without a selection.
    pub fn set_query_text(&mut self, query: &str) -> Option<SearchRequest> {
        if self.query != query || is_blank(query) {
            self.results = None;
        }
        self.query = query.to_string();
        self.current_request()
    }

    /// The request matching the current selection and query.
    pub fn current_request(&self) -> Option<SearchRequest> {
        self.selected.as_ref().map(|id| SearchRequest {
            university_id: id.clone(),
            query: self.query.clone(),
        })
    }

    /// Apply results computed elsewhere. Results for another university or an
    /// older query are stale and dropped; returns whether they were applied.
    pub fn accept_results(&mut self, request: &SearchRequest, results: SearchResultSet) -> bool {
        let current = self.selected.as_deref() == Some(request.university_id.as_str())
            && self.query == request.query;
        if !current {
            tracing::debug!(
                "Dropping stale results for '{}' / '{}'",
                request.university_id,
                request.query
            );
            return false;
        }

        self.results = if is_blank(&request.query) {
            None
        } else {
            Some(results)
        };
        true
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.results = None;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn reset_derived(&mut self) {
        self.active_section = Category::default();
        self.query.clear();
        self.results = None;
    }

    /// Mirror the selection into the store. Failures are logged, never fatal.
    fn persist(&mut self) {
        let outcome = match &self.selected {
            Some(id) => self.store.set(SELECTED_UNIVERSITY_KEY, id),
            None => self.store.remove(SELECTED_UNIVERSITY_KEY),
        };
        if let Err(e) = outcome {
            tracing::warn!("Failed to persist selection: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GuideData;
    use crate::error::{GuideError, Result};
    use crate::storage::MemoryStore;

    fn directory() -> Arc<UniversityDirectory> {
        Arc::new(UniversityDirectory::new(GuideData::bundled().unwrap()))
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(GuideError::Persistence("disk full".to_string()))
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(GuideError::Persistence("disk full".to_string()))
        }
    }

    #[test]
    fn test_select_persists_and_resets() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        assert!(!state.is_selected());

        let name = state.select("unilag").map(|u| u.name.clone());
        assert_eq!(name.as_deref(), Some("University of Lagos"));
        assert_eq!(state.active_section(), Category::CampusMap);
        assert_eq!(
            state.store().get(SELECTED_UNIVERSITY_KEY),
            Some("unilag".to_string())
        );
    }

    #[test]
    fn test_switching_university_clears_stale_search() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        state.select("unilag");
        state.set_active_section(Category::Hostels);
        assert!(state.update_query("hall").is_some());

        state.select("abu");
        assert_eq!(state.selected_id(), Some("abu"));
        assert_eq!(state.query(), "");
        assert!(state.results().is_none());
        assert_eq!(state.active_section(), Category::CampusMap);
    }

    #[test]
    fn test_unknown_select_clears() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        state.select("unilag");

        assert!(state.select("atlantis").is_none());
        assert!(!state.is_selected());
        assert_eq!(state.store().get(SELECTED_UNIVERSITY_KEY), None);
    }

    #[test]
    fn test_clear_removes_key() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        state.select("ui");
        state.update_query("library");

        state.clear();
        assert!(state.selected_university().is_none());
        assert!(state.results().is_none());
        assert_eq!(state.query(), "");
        assert_eq!(state.store().get(SELECTED_UNIVERSITY_KEY), None);
    }

    #[test]
    fn test_restore_valid_id() {
        let store = MemoryStore::with_entry(SELECTED_UNIVERSITY_KEY, "oau");
        let state = SelectionState::restore(directory(), store);
        assert_eq!(state.selected_id(), Some("oau"));
    }

    #[test]
    fn test_restore_stale_id_settles_to_no_selection() {
        let store = MemoryStore::with_entry(SELECTED_UNIVERSITY_KEY, "closed-down");
        let state = SelectionState::restore(directory(), store);

        assert!(!state.is_selected());
        assert_eq!(state.store().get(SELECTED_UNIVERSITY_KEY), None);
    }

    #[test]
    fn test_update_query_without_selection() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        assert!(state.update_query("hall").is_none());
        assert_eq!(state.query(), "hall");
    }

    #[test]
    fn test_blank_query_clears_results() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        state.select("unilag");
        state.update_query("hall");
        assert!(state.results().is_some());

        assert!(state.update_query("  ").is_none());
        assert!(state.results().is_none());
    }

    #[test]
    fn test_accept_results_rejects_other_university() {
        let dir = directory();
        let mut state = SelectionState::new(Arc::clone(&dir), MemoryStore::new());
        state.select("unilag");
        let request = state.set_query_text("hall").unwrap();
        let results = crate::search::search_content(&dir, &request.university_id, &request.query);

        state.select("abu");
        state.set_query_text("hall");
        assert!(!state.accept_results(&request, results));
        assert!(state.results().is_none());
    }

    #[test]
    fn test_accept_results_rejects_older_query() {
        let dir = directory();
        let mut state = SelectionState::new(Arc::clone(&dir), MemoryStore::new());
        state.select("unilag");
        let old = state.set_query_text("ha").unwrap();
        let new = state.set_query_text("hall").unwrap();

        let stale = crate::search::search_content(&dir, &old.university_id, &old.query);
        assert!(!state.accept_results(&old, stale));

        let fresh = crate::search::search_content(&dir, &new.university_id, &new.query);
        assert!(state.accept_results(&new, fresh));
        assert_eq!(state.results().unwrap().hostels.len(), 3);
    }

    #[test]
    fn test_new_query_text_drops_previous_results() {
        let mut state = SelectionState::new(directory(), MemoryStore::new());
        state.select("unilag");
        state.update_query("female");
        assert_eq!(state.results().map(|r| r.hostels.len()), Some(1));

        // Same text again keeps what is shown
        state.set_query_text("female");
        assert!(state.results().is_some());

        state.set_query_text("engineering");
        assert_eq!(state.query(), "engineering");
        assert!(state.results().is_none());
    }

    #[test]
    fn test_persistence_failure_does_not_block_selection() {
        let mut state = SelectionState::new(directory(), BrokenStore);
        assert!(state.select("unilag").is_some());
        assert_eq!(state.selected_id(), Some("unilag"));

        state.clear();
        assert!(!state.is_selected());
    }
}
