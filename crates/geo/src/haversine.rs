//! Haversine great-circle distance.

use crate::point::GeoPoint;

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given as decimal
/// degrees `(lat, lon)` pairs.
///
/// Deterministic, pure, and defined for any finite input. Inputs outside the
/// usual coordinate ranges are not rejected.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding can push `a` fractionally above 1.0 at the exact antipode,
    // which would take `asin` outside its domain and return NaN.
    let c = 2.0 * a.sqrt().clamp(0.0, 1.0).asin();
    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometres between two [`GeoPoint`]s.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    haversine_km(a.lat(), a.lon(), b.lat(), b.lon())
}
