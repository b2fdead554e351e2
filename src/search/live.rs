//! Debounced search wiring for interactive input.
//!
//! Keystrokes call `query_changed`; only the last query in a burst is
//! searched, and the outcome is delivered over an unbounded channel together
//! with the request that produced it. Receivers decide whether the outcome is
//! still current (see `SelectionState::accept_results`). Timers run on the
//! runtime handle passed to `new`, so callers need not be async themselves.

use super::engine::search_content;
use super::results::SearchResultSet;
use crate::debounce::Debouncer;
use crate::lookup::UniversityDirectory;
use crate::utils::text::is_blank;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Content debounce used by the search bar.
pub const DEFAULT_CONTENT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce for the university picker.
pub const DEFAULT_DIRECTORY_DEBOUNCE: Duration = Duration::from_millis(150);

/// The inputs a content search ran with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub university_id: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSearchOutcome {
    pub request: SearchRequest,
    pub results: SearchResultSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySearchOutcome {
    pub query: String,
    /// Matching university ids in dataset order
    pub university_ids: Vec<String>,
}

/// Debounced `search_content`.
pub struct LiveContentSearch {
    directory: Arc<UniversityDirectory>,
    debouncer: Debouncer,
    outcomes: mpsc::UnboundedSender<ContentSearchOutcome>,
}

impl LiveContentSearch {
    pub fn new(
        directory: Arc<UniversityDirectory>,
        runtime: Handle,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ContentSearchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let live = Self {
            directory,
            debouncer: Debouncer::new(runtime, delay),
            outcomes: tx,
        };
        (live, rx)
    }

    /// Schedule a search for `request`, superseding any pending one.
    ///
    /// A blank query is delivered without waiting (its result is empty).
    pub fn query_changed(&mut self, request: SearchRequest) {
        let delay = if is_blank(&request.query) {
            Duration::ZERO
        } else {
            self.debouncer.delay()
        };

        let directory = Arc::clone(&self.directory);
        let outcomes = self.outcomes.clone();
        self.debouncer.schedule_after(delay, move || {
            let results = search_content(&directory, &request.university_id, &request.query);
            if outcomes.send(ContentSearchOutcome { request, results }).is_err() {
                tracing::debug!("Content search outcome dropped: receiver closed");
            }
        });
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

/// Debounced `search_by_name_or_location`.
pub struct LiveDirectorySearch {
    directory: Arc<UniversityDirectory>,
    debouncer: Debouncer,
    outcomes: mpsc::UnboundedSender<DirectorySearchOutcome>,
}

impl LiveDirectorySearch {
    pub fn new(
        directory: Arc<UniversityDirectory>,
        runtime: Handle,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<DirectorySearchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let live = Self {
            directory,
            debouncer: Debouncer::new(runtime, delay),
            outcomes: tx,
        };
        (live, rx)
    }

    /// Schedule a directory search. A blank query (the full list) is
    /// delivered without waiting.
    pub fn query_changed(&mut self, query: &str) {
        let delay = if is_blank(query) {
            Duration::ZERO
        } else {
            self.debouncer.delay()
        };

        let directory = Arc::clone(&self.directory);
        let outcomes = self.outcomes.clone();
        let query = query.to_string();
        self.debouncer.schedule_after(delay, move || {
            let university_ids = directory
                .search_by_name_or_location(&query)
                .into_iter()
                .map(|uni| uni.id.clone())
                .collect();
            if outcomes
                .send(DirectorySearchOutcome { query, university_ids })
                .is_err()
            {
                tracing::debug!("Directory search outcome dropped: receiver closed");
            }
        });
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
