//! Student Guide Core
//!
//! Data layer for a guide to Nigerian universities: a validated, immutable
//! dataset of campus reference content, lookups over it, a categorized
//! substring search, and the selection state a UI drives.
//!
//! - `data`: dataset loading and validation
//! - `lookup`: id index and name/location search
//! - `search/`: content search engine, result sets, debounced wiring
//! - `campus`: stats, type filters and proximity queries
//! - `selection` + `storage`: selected university with injected persistence
//! - `debounce`: cancellable delayed execution
//! - `config`: environment-driven settings

pub mod campus;
pub mod config;
pub mod data;
pub mod debounce;
pub mod error;
pub mod lookup;
pub mod search;
pub mod selection;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::GuideConfig;
pub use data::GuideData;
pub use debounce::Debouncer;
pub use error::{GuideError, Result};
pub use lookup::UniversityDirectory;
pub use search::{search_content, Category, SearchRequest, SearchResultSet};
pub use selection::{SelectionState, SELECTED_UNIVERSITY_KEY};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::*;
