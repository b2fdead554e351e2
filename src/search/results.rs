//! Search result types.
//!
//! A `SearchResultSet` always carries all six categories. Five of them are
//! plain lists; `academics` is a two-list structure. Callers handle that shape
//! difference explicitly.

use crate::types::{CampusPoint, FacultyContact, FoodVendor, Hostel, Office, Service, TransportOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content category, also used as the active dashboard section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    CampusMap,
    Hostels,
    Transport,
    Food,
    Academics,
    Services,
}

impl Category {
    /// Navigation order.
    pub const ALL: [Category; 6] = [
        Category::CampusMap,
        Category::Hostels,
        Category::Transport,
        Category::Food,
        Category::Academics,
        Category::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CampusMap => "campus_map",
            Category::Hostels => "hostels",
            Category::Transport => "transport",
            Category::Food => "food",
            Category::Academics => "academics",
            Category::Services => "services",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::CampusMap => "Campus Locations",
            Category::Hostels => "Hostels",
            Category::Transport => "Transport",
            Category::Food => "Food & Dining",
            Category::Academics => "Academics",
            Category::Services => "Services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Academic matches: contacts and offices are matched independently.
///
/// Present (possibly with both lists empty) in every result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicMatches {
    pub faculty_contacts: Vec<FacultyContact>,
    pub important_offices: Vec<Office>,
}

impl AcademicMatches {
    pub fn len(&self) -> usize {
        self.faculty_contacts.len() + self.important_offices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faculty_contacts.is_empty() && self.important_offices.is_empty()
    }
}

/// Per-category matches for one university and one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultSet {
    pub campus_map: Vec<CampusPoint>,
    pub hostels: Vec<Hostel>,
    pub transport: Vec<TransportOption>,
    pub food: Vec<FoodVendor>,
    pub services: Vec<Service>,
    pub academics: AcademicMatches,
}

impl SearchResultSet {
    /// Number of matches in one category (academics sums both lists).
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::CampusMap => self.campus_map.len(),
            Category::Hostels => self.hostels.len(),
            Category::Transport => self.transport.len(),
            Category::Food => self.food.len(),
            Category::Services => self.services.len(),
            Category::Academics => self.academics.len(),
        }
    }

    /// Total matches across all categories.
    pub fn total_count(&self) -> usize {
        Category::ALL.iter().map(|&c| self.count(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Categories with at least one match, in navigation order.
    pub fn matched_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.count(c) > 0)
            .collect()
    }

    /// Keep only the selected categories; the rest are emptied, not removed.
    ///
    /// An empty selection keeps everything.
    pub fn restrict_to(mut self, categories: &[Category]) -> Self {
        if categories.is_empty() {
            return self;
        }

        let keep = |c: Category| categories.contains(&c);
        if !keep(Category::CampusMap) {
            self.campus_map.clear();
        }
        if !keep(Category::Hostels) {
            self.hostels.clear();
        }
        if !keep(Category::Transport) {
            self.transport.clear();
        }
        if !keep(Category::Food) {
            self.food.clear();
        }
        if !keep(Category::Services) {
            self.services.clear();
        }
        if !keep(Category::Academics) {
            self.academics = AcademicMatches::default();
        }
        self
    }
}

/// Count matches in a serialized result set.
///
/// Arrays count by length; objects (the academics entry) count the total
/// length of their list values. Gives the same number as
/// `SearchResultSet::total_count` for a serialized set.
pub fn count_json_results(results: &serde_json::Value) -> usize {
    let Some(categories) = results.as_object() else {
        return 0;
    };

    categories
        .values()
        .map(|value| match value {
            serde_json::Value::Array(items) => items.len(),
            serde_json::Value::Object(inner) => inner
                .values()
                .map(|v| v.as_array().map_or(0, |a| a.len()))
                .sum(),
            _ => 0,
        })
        .sum()
}
