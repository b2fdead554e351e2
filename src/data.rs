//! Dataset Loading and Validation
//!
//! Loads the university dataset once at startup and validates it before any
//! lookup or search can run. A dataset that fails to parse or validate is
//! fatal: nothing downstream has to handle half-formed records.
//!
//! Sources:
//! - a JSON file (`GuideData::load`)
//! - a JSON string (`GuideData::from_json_str`)
//! - the dataset bundled into the crate (`GuideData::bundled`)

use crate::error::{GuideError, Result};
use crate::types::{DatasetDocument, University};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Dataset compiled into the crate.
const BUNDLED_DATASET: &str = include_str!("../data/universities.json");

/// Immutable, validated collection of universities in dataset order.
#[derive(Debug, Clone)]
pub struct GuideData {
    universities: Vec<University>,
}

impl GuideData {
    /// Load and validate a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let data = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} universities from {}",
            data.universities.len(),
            path.display()
        );
        Ok(data)
    }

    /// Load the dataset bundled with the crate.
    pub fn bundled() -> Result<Self> {
        let data = Self::from_json_str(BUNDLED_DATASET)?;
        tracing::info!("Loaded {} bundled universities", data.universities.len());
        Ok(data)
    }

    /// Parse and validate a dataset document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_str(raw)
            .map_err(|e| GuideError::MalformedDataset(e.to_string()))?;

        Self::from_universities(document.universities)
    }

    /// Validate an already-built list of universities.
    pub fn from_universities(universities: Vec<University>) -> Result<Self> {
        validate(&universities)?;
        Ok(Self { universities })
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn into_universities(self) -> Vec<University> {
        self.universities
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

/// Hostel genders the guide recognises.
pub const HOSTEL_GENDERS: [&str; 2] = ["Male", "Female"];

/// Checks serde cannot express: id uniqueness, coordinate ranges, hostel gender.
fn validate(universities: &[University]) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for (idx, uni) in universities.iter().enumerate() {
        if uni.id.trim().is_empty() {
            return Err(GuideError::MalformedDataset(format!(
                "university at position {} has a blank id",
                idx
            )));
        }

        if !seen.insert(uni.id.as_str()) {
            return Err(GuideError::MalformedDataset(format!(
                "duplicate university id '{}'",
                uni.id
            )));
        }

        for point in &uni.campus_map {
            let lat_ok = point.lat.is_finite() && (-90.0..=90.0).contains(&point.lat);
            let lng_ok = point.lng.is_finite() && (-180.0..=180.0).contains(&point.lng);
            if !lat_ok || !lng_ok {
                return Err(GuideError::MalformedDataset(format!(
                    "campus point '{}' of '{}' has invalid coordinates ({}, {})",
                    point.name, uni.id, point.lat, point.lng
                )));
            }
        }

        for hostel in &uni.hostels {
            if !HOSTEL_GENDERS.contains(&hostel.gender.as_str()) {
                return Err(GuideError::MalformedDataset(format!(
                    "hostel '{}' of '{}' has gender '{}', expected one of {:?}",
                    hostel.name, uni.id, hostel.gender, HOSTEL_GENDERS
                )));
            }
        }
    }

    Ok(())
}
