//! University Lookup Service
//!
//! Resolves universities by id in O(1) through an id → position index and
//! lists or filters them in dataset order. Dataset order drives the default
//! landing ordering, so it is never re-sorted here.

use crate::data::GuideData;
use crate::types::University;
use crate::utils::text::Needle;
use rustc_hash::FxHashMap;

/// Read-only directory over a validated dataset.
#[derive(Debug, Clone)]
pub struct UniversityDirectory {
    /// All universities in dataset order
    universities: Vec<University>,
    /// University id → position in `universities`
    by_id: FxHashMap<String, usize>,
}

impl UniversityDirectory {
    /// Build the id index. Ids are unique: `GuideData` validated that.
    pub fn new(data: GuideData) -> Self {
        let universities = data.into_universities();
        let by_id = universities
            .iter()
            .enumerate()
            .map(|(idx, uni)| (uni.id.clone(), idx))
            .collect();

        Self {
            universities,
            by_id,
        }
    }

    /// All universities in dataset order.
    pub fn get_all(&self) -> &[University] {
        &self.universities
    }

    /// Exact id lookup.
    pub fn get_by_id(&self, id: &str) -> Option<&University> {
        self.by_id.get(id).map(|&idx| &self.universities[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Case-insensitive substring match on name or location.
    ///
    /// A blank query returns every university; no match returns an empty list.
    pub fn search_by_name_or_location(&self, query: &str) -> Vec<&University> {
        let Some(needle) = Needle::new(query) else {
            return self.universities.iter().collect();
        };

        let matches: Vec<&University> = self
            .universities
            .iter()
            .filter(|uni| needle.found_in_any(&[uni.name.as_str(), uni.location.as_str()]))
            .collect();

        tracing::debug!(
            "University search '{}' matched {} of {}",
            query,
            matches.len(),
            self.universities.len()
        );
        matches
    }

    /// Ids in dataset order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.universities.iter().map(|uni| uni.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

impl From<GuideData> for UniversityDirectory {
    fn from(data: GuideData) -> Self {
        Self::new(data)
    }
}
