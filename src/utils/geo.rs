//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two (lat, lng) points in degrees.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let half_lat = libm::sin(d_lat / 2.0);
    let half_lng = libm::sin(d_lng / 2.0);
    let a = half_lat * half_lat
        + libm::cos(lat1.to_radians()) * libm::cos(lat2.to_radians()) * half_lng * half_lng;
    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

    EARTH_RADIUS_KM * c
}
