//! Content search over one university's sub-collections.
//!
//! - `engine`: the categorized substring filter
//! - `results`: result set, categories and match counting
//! - `live`: debounced wiring for interactive input

pub mod engine;
pub mod live;
pub mod results;

pub use engine::{search_content, search_university};
pub use live::{
    ContentSearchOutcome, DirectorySearchOutcome, LiveContentSearch, LiveDirectorySearch,
    SearchRequest, DEFAULT_CONTENT_DEBOUNCE, DEFAULT_DIRECTORY_DEBOUNCE,
};
pub use results::{count_json_results, AcademicMatches, Category, SearchResultSet, UnknownCategory};
