use crate::domain::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the great-circle distance in kilometers between `origin` and `destination` using the haversine formula.
///
/// Coordinates are not validated; callers supply geographic coordinates in degrees.
pub fn estimate_distance_km(origin: &GeoPoint, destination: &GeoPoint) -> f64 {
    let d_lat = (destination.latitude - origin.latitude).to_radians();
    let d_lon = (destination.longitude - origin.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + origin.latitude_radians().cos() * destination.latitude_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
