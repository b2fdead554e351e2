//! Shared data types for the university dataset.
//!
//! Data source: `data/universities.json` (or any file with the same shape).
//! Every record is immutable once loaded. Sub-collections default to empty
//! when absent from the source document.

use serde::{Deserialize, Serialize};

/// A single university and all of its reference content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub campus_map: Vec<CampusPoint>,
    #[serde(default)]
    pub hostels: Vec<Hostel>,
    #[serde(default)]
    pub transport: Vec<TransportOption>,
    #[serde(default)]
    pub food: Vec<FoodVendor>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub academics: AcademicInfo,
}

/// A point on the campus map.
///
/// `kind` is an open set of labels (hostel, library, faculty, bank,
/// restaurant, ...) and serializes as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusPoint {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostel {
    pub name: String,
    /// "Male" or "Female" in the bundled data
    pub gender: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub facilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub kind: String,
    pub route: String,
    #[serde(default)]
    pub fare: String,
    #[serde(default)]
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodVendor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub price_range: String,
    pub location: String,
    #[serde(default)]
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub hours: String,
}

/// Academic links and contact lists for a university.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicInfo {
    #[serde(default)]
    pub registration_portal: Option<String>,
    #[serde(default)]
    pub academic_calendar: Option<String>,
    #[serde(default)]
    pub faculty_contacts: Vec<FacultyContact>,
    #[serde(default)]
    pub important_offices: Vec<Office>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyContact {
    pub faculty: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub office: String,
    pub location: String,
    #[serde(default)]
    pub hours: String,
}

/// Top-level shape of a dataset document: `{"universities": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub universities: Vec<University>,
}
