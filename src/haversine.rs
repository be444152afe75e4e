//! Great-circle distance on a spherical earth.
//!
//! Ignores roads entirely: distances are straight lines over the sphere's
//! surface, not routed paths.

use rayon::prelude::*;

use crate::error::RouteError;
use crate::traits::DistanceMatrixProvider;

/// Mean earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Default stop count from which matrix rows are computed in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Reject latitudes outside `[-90, 90]`, longitudes outside `[-180, 180]`,
/// and non-finite values.
pub fn validate_coordinate(location: (f64, f64)) -> Result<(), RouteError> {
    let (lat, lng) = location;
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Ok(())
    } else {
        Err(RouteError::InvalidCoordinate {
            latitude: lat,
            longitude: lng,
        })
    }
}

/// Great-circle distance between two `(lat, lng)` points in kilometers.
///
/// Symmetric bit-for-bit and zero for coincident points.
///
/// # Examples
/// ```
/// use route_planner::haversine::distance;
///
/// let km = distance((0.0, 0.0), (0.0, 1.0)).unwrap();
/// assert!((km - 111.19).abs() < 0.01);
/// assert_eq!(distance((10.0, 20.0), (10.0, 20.0)).unwrap(), 0.0);
/// assert!(distance((91.0, 0.0), (0.0, 0.0)).is_err());
/// ```
pub fn distance(from: (f64, f64), to: (f64, f64)) -> Result<f64, RouteError> {
    validate_coordinate(from)?;
    validate_coordinate(to)?;
    Ok(haversine_km(from, to))
}

/// Unchecked haversine; callers validate first.
pub(crate) fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    // Absolute deltas keep the result identical when the arguments swap.
    let delta_lat = (lat2 - lat1).abs().to_radians();
    let delta_lng = (lng2 - lng1).abs().to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Location count from which rows are evaluated with rayon.
    pub parallel_threshold: usize,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl HaversineMatrix {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    fn row(locations: &[(f64, f64)], i: usize) -> Vec<f64> {
        locations
            .iter()
            .enumerate()
            .map(|(j, to)| {
                if i == j {
                    0.0
                } else {
                    haversine_km(locations[i], *to)
                }
            })
            .collect()
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<Vec<Vec<f64>>, RouteError> {
        for location in locations {
            validate_coordinate(*location)?;
        }

        let n = locations.len();
        let matrix = if n >= self.parallel_threshold {
            (0..n).into_par_iter().map(|i| Self::row(locations, i)).collect()
        } else {
            (0..n).map(|i| Self::row(locations, i)).collect()
        };

        Ok(matrix)
    }
}
