//! Great-circle geometry over a spherical Earth.
//!
//! Distances use the haversine formula with the mean Earth radius
//! (6371.0 km). Good to ~0.5% against the ellipsoid; the error grows
//! toward antipodal point pairs and is negligible at city scale.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether the point lies in the conventional coordinate ranges
    /// (lat -90..90, lon -180..180). The distance math is defined for
    /// any real angles; callers validate at the boundary.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// `sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)` is clamped to [0, 1] so
/// rounding near antipodal pairs cannot push `sqrt` out of domain.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Format coordinates as `19.4326°N, 99.1332°W` for banners and logs.
pub fn format_coords(p: GeoPoint) -> String {
    let ns = if p.lat >= 0.0 { 'N' } else { 'S' };
    let ew = if p.lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{}, {:.4}°{}", p.lat.abs(), ns, p.lon.abs(), ew)
}
