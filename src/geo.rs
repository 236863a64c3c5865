//! Great-circle distances and nearest stop resolution.

use tracing::warn;

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point from client input, rejecting values no coordinate can have.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoPointError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange(longitude));
        }

        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeoPointError {
    #[error("coordinates must be finite numbers")]
    NotFinite,

    #[error("latitude {0} is outside of [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside of [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Anything that sits on the map.
pub trait Positioned {
    fn position(&self) -> GeoPoint;
}

impl Positioned for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

/// Haversine distance between two points in kilometers.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Debug, PartialEq)]
pub struct Nearest<'a, T> {
    pub item: &'a T,
    pub distance: f64,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("no candidates to search")]
pub struct NoCandidates;

/// Scans every candidate and returns the closest one to `point`.
///
/// Ties go to the candidate that comes first, so the order of `candidates` matters.
/// Candidates whose distance can't be computed are skipped.
pub fn nearest<T: Positioned>(point: GeoPoint, candidates: &[T]) -> Result<Nearest<'_, T>, NoCandidates> {
    let mut best: Option<Nearest<'_, T>> = None;

    for candidate in candidates {
        let distance = distance_km(point, candidate.position());
        if distance.is_nan() {
            warn!("skipping candidate at {:?} with no computable distance", candidate.position());
            continue;
        }

        if best.as_ref().is_none_or(|b| distance < b.distance) {
            best = Some(Nearest {
                item: candidate,
                distance,
            });
        }
    }

    best.ok_or(NoCandidates)
}
