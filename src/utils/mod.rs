//! Utility modules shared by lookup, search and campus queries
//!
//! - Text: case-insensitive substring matching
//! - Geo: great-circle distance

pub mod geo;
pub mod text;

pub use geo::haversine_km;
pub use text::{is_blank, Needle};
