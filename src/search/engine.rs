//! Categorized content search within one university.
//!
//! Each category is filtered independently with case-insensitive substring
//! containment over a fixed set of fields:
//!
//! | category   | fields                                   |
//! |------------|------------------------------------------|
//! | campus_map | name, type, description                  |
//! | hostels    | name, gender                             |
//! | transport  | type, route                              |
//! | food       | name, type, location                     |
//! | services   | name, type, location                     |
//! | academics  | contacts: faculty, email; offices: office, location |
//!
//! Filters are stable: matches keep their dataset order.

use super::results::{AcademicMatches, SearchResultSet};
use crate::lookup::UniversityDirectory;
use crate::types::University;
use crate::utils::text::Needle;

/// Search one university's content by id.
///
/// An unknown id or a blank query gives the empty result set (all six
/// categories present, all empty).
pub fn search_content(
    directory: &UniversityDirectory,
    university_id: &str,
    query: &str,
) -> SearchResultSet {
    let Some(university) = directory.get_by_id(university_id) else {
        tracing::debug!("Content search for unknown university '{}'", university_id);
        return SearchResultSet::default();
    };

    search_university(university, query)
}

/// Search an already-resolved university.
pub fn search_university(university: &University, query: &str) -> SearchResultSet {
    let Some(needle) = Needle::new(query) else {
        return SearchResultSet::default();
    };

    let results = SearchResultSet {
        campus_map: filter_cloned(&university.campus_map, |p| {
            needle.found_in_any(&[&p.name, &p.kind, &p.description])
        }),
        hostels: filter_cloned(&university.hostels, |h| {
            needle.found_in_any(&[&h.name, &h.gender])
        }),
        transport: filter_cloned(&university.transport, |t| {
            needle.found_in_any(&[&t.kind, &t.route])
        }),
        food: filter_cloned(&university.food, |f| {
            needle.found_in_any(&[&f.name, &f.kind, &f.location])
        }),
        services: filter_cloned(&university.services, |s| {
            needle.found_in_any(&[&s.name, &s.kind, &s.location])
        }),
        academics: AcademicMatches {
            faculty_contacts: filter_cloned(&university.academics.faculty_contacts, |c| {
                needle.found_in_any(&[&c.faculty, &c.email])
            }),
            important_offices: filter_cloned(&university.academics.important_offices, |o| {
                needle.found_in_any(&[&o.office, &o.location])
            }),
        },
    };

    tracing::debug!(
        "Content search '{}' in '{}' matched {} items",
        query,
        university.id,
        results.total_count()
    );
    results
}

fn filter_cloned<T: Clone>(items: &[T], mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| keep(*item)).cloned().collect()
}
