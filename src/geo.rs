//! Great-circle geometry for course features.
//!
//! This module provides pure functions over `Coordinate` values - no platform
//! calls, no state. Distances are haversine great-circle distances on a
//! spherical Earth, rounded to whole meters.

use crate::error::{CoordError, LocationError};
use crate::models::{BallMarker, Coordinate};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Source of the device's current position: the platform geolocation API on a
/// real host, a fixed value under test.
pub trait PositionProvider {
    fn current_position(&mut self) -> Result<Coordinate, LocationError>;
}

/// Great-circle distance between two points, rounded to the nearest meter.
///
/// Both endpoints are range-checked; a coordinate outside [-90, 90] latitude
/// or [-180, 180] longitude is an error, not a number.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> Result<u32, CoordError> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_m(a, b).round() as u32)
}

/// Initial great-circle bearing from `a` to `b`, in degrees [0, 360).
pub fn initial_bearing_degrees(a: Coordinate, b: Coordinate) -> Result<f64, CoordError> {
    a.validate()?;
    b.validate()?;

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees();
    Ok((bearing + 360.0) % 360.0)
}

/// Recompute each marker's derived distance from `origin`.
///
/// `distance_m` always reflects the current position and goes `None` when
/// either endpoint is out of range.
pub fn markers_with_distances(markers: Vec<BallMarker>, origin: Coordinate) -> Vec<BallMarker> {
    markers
        .into_iter()
        .map(|mut marker| {
            marker.distance_m = distance_meters(origin, marker.coordinate).ok();
            marker
        })
        .collect()
}

fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Clamp before asin: rounding can push h a hair past 1 for antipodes.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}
