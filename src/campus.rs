//! Campus Insights
//!
//! Summaries and filters over a university's campus map and services:
//! - Stats: per-collection counts for the dashboard header
//! - Type filters: exact type match, and the multi-select map filter
//! - Proximity: campus points within a radius of a coordinate

use crate::lookup::UniversityDirectory;
use crate::types::{CampusPoint, University};
use crate::utils::geo::haversine_km;
use serde::Serialize;

/// Radius used when the caller has no preference.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UniversityStats {
    pub total_locations: usize,
    pub total_hostels: usize,
    pub total_transport_options: usize,
    pub total_food_options: usize,
    pub total_services: usize,
    pub total_faculties: usize,
}

impl UniversityStats {
    pub fn of(university: &University) -> Self {
        Self {
            total_locations: university.campus_map.len(),
            total_hostels: university.hostels.len(),
            total_transport_options: university.transport.len(),
            total_food_options: university.food.len(),
            total_services: university.services.len(),
            total_faculties: university.academics.faculty_contacts.len(),
        }
    }
}

pub fn university_stats(directory: &UniversityDirectory, university_id: &str) -> Option<UniversityStats> {
    directory.get_by_id(university_id).map(UniversityStats::of)
}

/// Campus points whose type equals `kind` exactly.
pub fn locations_by_type<'a>(
    directory: &'a UniversityDirectory,
    university_id: &str,
    kind: &str,
) -> Vec<&'a CampusPoint> {
    directory
        .get_by_id(university_id)
        .map(|uni| uni.campus_map.iter().filter(|p| p.kind == kind).collect())
        .unwrap_or_default()
}

/// Campus points whose type is one of `kinds`; no kinds selected keeps all.
pub fn filter_locations<'a, S: AsRef<str>>(university: &'a University, kinds: &[S]) -> Vec<&'a CampusPoint> {
    university
        .campus_map
        .iter()
        .filter(|p| kinds.is_empty() || kinds.iter().any(|k| k.as_ref() == p.kind))
        .collect()
}

/// Distinct campus point types in first-seen order.
pub fn location_types(university: &University) -> Vec<&str> {
    let mut kinds: Vec<&str> = Vec::new();
    for point in &university.campus_map {
        if !kinds.contains(&point.kind.as_str()) {
            kinds.push(point.kind.as_str());
        }
    }
    kinds
}

/// Campus points within `radius_km` (inclusive) of (`lat`, `lng`).
pub fn nearby_locations<'a>(
    directory: &'a UniversityDirectory,
    university_id: &str,
    lat: f64,
    lng: f64,
    radius_km: f64,
) -> Vec<&'a CampusPoint> {
    let Some(university) = directory.get_by_id(university_id) else {
        return Vec::new();
    };

    university
        .campus_map
        .iter()
        .filter(|p| haversine_km(lat, lng, p.lat, p.lng) <= radius_km)
        .collect()
}

/// `(type, count)` for services, in first-seen order.
pub fn service_type_counts(university: &University) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for service in &university.services {
        match counts.iter_mut().find(|(kind, _)| *kind == service.kind) {
            Some((_, n)) => *n += 1,
            None => counts.push((service.kind.as_str(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GuideData;

    fn directory() -> UniversityDirectory {
        UniversityDirectory::new(GuideData::bundled().unwrap())
    }

    #[test]
    fn test_stats() {
        let stats = university_stats(&directory(), "unilag").unwrap();
        assert_eq!(
            stats,
            UniversityStats {
                total_locations: 6,
                total_hostels: 3,
                total_transport_options: 2,
                total_food_options: 2,
                total_services: 3,
                total_faculties: 2,
            }
        );
        assert!(university_stats(&directory(), "nowhere").is_none());
    }

    #[test]
    fn test_stats_for_sparse_record() {
        // unn has no campus map, hostels, food or academics in the bundle
        let stats = university_stats(&directory(), "unn").unwrap();
        assert_eq!(stats.total_locations, 0);
        assert_eq!(stats.total_transport_options, 1);
        assert_eq!(stats.total_faculties, 0);
    }

    #[test]
    fn test_locations_by_type_is_exact() {
        let dir = directory();
        let libraries = locations_by_type(&dir, "unilag", "library");
        assert_eq!(libraries.len(), 1);
        assert_eq!(libraries[0].name, "Kenneth Dike Library");

        assert!(locations_by_type(&dir, "unilag", "Library").is_empty());
        assert!(locations_by_type(&dir, "nowhere", "library").is_empty());
    }

    #[test]
    fn test_filter_locations() {
        let dir = directory();
        let unilag = dir.get_by_id("unilag").unwrap();

        assert_eq!(filter_locations::<&str>(unilag, &[]).len(), 6);
        let picked: Vec<&str> = filter_locations(unilag, &["bank", "hostel"])
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(picked, vec!["First Bank Branch", "Jaja Hall"]);
    }

    #[test]
    fn test_location_types_first_seen() {
        let dir = directory();
        let unilag = dir.get_by_id("unilag").unwrap();
        assert_eq!(
            location_types(unilag),
            vec!["library", "administration", "faculty", "bank", "restaurant", "hostel"]
        );
    }

    #[test]
    fn test_nearby_locations() {
        let dir = directory();
        // Standing at the library
        let near = nearby_locations(&dir, "unilag", 6.5158, 3.3989, DEFAULT_NEARBY_RADIUS_KM);
        let names: Vec<&str> = near.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Kenneth Dike Library"));
        assert!(names.contains(&"Senate Building"));
        // Only the library itself within 50 m
        let very_near = nearby_locations(&dir, "unilag", 6.5158, 3.3989, 0.05);
        assert_eq!(very_near.len(), 1);

        assert!(nearby_locations(&dir, "nowhere", 0.0, 0.0, 100.0).is_empty());
    }

    #[test]
    fn test_nearby_radius_is_inclusive() {
        let dir = directory();
        let unilag = dir.get_by_id("unilag").unwrap();
        let (lat, lng) = (6.5158, 3.3989);
        let senate = unilag
            .campus_map
            .iter()
            .find(|p| p.name == "Senate Building")
            .unwrap();
        let distance = haversine_km(lat, lng, senate.lat, senate.lng);
        assert!(distance > 0.0);

        let on_edge = nearby_locations(&dir, "unilag", lat, lng, distance);
        assert!(on_edge.iter().any(|p| p.name == "Senate Building"));

        let just_short = nearby_locations(&dir, "unilag", lat, lng, distance * (1.0 - 1e-9));
        assert!(!just_short.iter().any(|p| p.name == "Senate Building"));
    }

    #[test]
    fn test_service_type_counts() {
        let dir = directory();
        let unilag = dir.get_by_id("unilag").unwrap();
        assert_eq!(
            service_type_counts(unilag),
            vec![("bank", 1), ("healthcare", 1), ("printing", 1)]
        );
    }
}
