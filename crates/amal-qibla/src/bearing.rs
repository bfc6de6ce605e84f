//! Initial great-circle bearing between two Earth coordinates.

use serde::{Deserialize, Serialize};

use amal_core::AmalError;

/// An observer position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The fixed destination every bearing points at.
pub const KAABA: Coordinate = Coordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180]; both
    /// must be finite. Geolocation APIs already guarantee this, so a
    /// violation is a caller bug surfaced as a `GEO/` error.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AmalError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(AmalError::Geo(format!(
                "non-finite coordinate ({latitude}, {longitude})"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AmalError::Geo(format!("latitude out of range: {latitude}")));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AmalError::Geo(format!("longitude out of range: {longitude}")));
        }
        Ok(Self { latitude, longitude })
    }
}

/// A computed initial bearing, degrees from true north in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BearingResult {
    pub bearing_degrees: f64,
}

/// Initial great-circle bearing from `from` to `to` (0 = North, clockwise).
///
/// θ = atan2(sin Δλ, cos φ₁ · tan φ₂ − sin φ₁ · cos Δλ), normalized into
/// [0, 360). Computed once per geolocation fix, not per sensor event.
pub fn bearing_between(from: &Coordinate, to: &Coordinate) -> BearingResult {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let theta = delta_lng
        .sin()
        .atan2(lat1.cos() * lat2.tan() - lat1.sin() * delta_lng.cos());

    BearingResult {
        bearing_degrees: theta.to_degrees().rem_euclid(360.0),
    }
}

/// Bearing from the observer to the Kaaba.
pub fn compute_bearing(observer: &Coordinate) -> BearingResult {
    bearing_between(observer, &KAABA)
}
