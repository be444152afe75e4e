//! Tour builder: nearest-neighbor construction over a distance matrix.
//!
//! Single greedy pass, no improvement phase. The result is deterministic but
//! not optimal; a badly placed stop can be stranded until the end.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::RouteError;
use crate::haversine::{DEFAULT_PARALLEL_THRESHOLD, HaversineMatrix, validate_coordinate};
use crate::stop::Stop;
use crate::tour::Tour;
use crate::traits::DistanceMatrixProvider;
use crate::vehicle::{TransportMode, VehicleProfile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourOptions {
    /// Stop count from which the distance matrix is computed in parallel.
    pub parallel_threshold: usize,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builds tours from a set of stops.
///
/// Stateless between calls; one builder may serve any number of threads.
#[derive(Debug, Clone)]
pub struct TourBuilder<M = HaversineMatrix> {
    provider: M,
}

impl TourBuilder<HaversineMatrix> {
    pub fn new(options: TourOptions) -> Self {
        Self::with_provider(HaversineMatrix::new(options.parallel_threshold))
    }
}

impl Default for TourBuilder<HaversineMatrix> {
    fn default() -> Self {
        Self::new(TourOptions::default())
    }
}

impl<M: DistanceMatrixProvider> TourBuilder<M> {
    /// Builder backed by a custom distance source.
    pub fn with_provider(provider: M) -> Self {
        Self { provider }
    }

    /// Order `stops` by nearest neighbor from the first stop and measure the result.
    ///
    /// Fewer than three stops are returned in input order. The first stop
    /// always stays first.
    pub fn build(&self, stops: &[Stop], mode: TransportMode) -> Result<Tour, RouteError> {
        debug!(stops = stops.len(), mode = %mode, "building tour");
        self.plan(stops, mode, stops.len() >= 3)
    }

    /// Measure `stops` in the order given, without reordering.
    pub fn measure(&self, stops: &[Stop], mode: TransportMode) -> Result<Tour, RouteError> {
        debug!(stops = stops.len(), mode = %mode, "measuring fixed route");
        self.plan(stops, mode, false)
    }

    fn plan(&self, stops: &[Stop], mode: TransportMode, reorder: bool) -> Result<Tour, RouteError> {
        let locations: Vec<(f64, f64)> = stops.iter().map(Stop::location).collect();
        for (stop, location) in stops.iter().zip(&locations) {
            if let Err(err) = validate_coordinate(*location) {
                warn!(stop = %stop.id, "rejecting stop: {err}");
                return Err(err);
            }
        }

        if stops.len() < 2 {
            return Ok(Tour::stationary(stops.to_vec(), mode));
        }

        let matrix = self
            .provider
            .matrix_for(&locations)
            .and_then(|matrix| check_matrix(&matrix, stops.len()).map(|()| matrix))
            .inspect_err(|err| warn!("rejecting distance matrix: {err}"))?;

        let order = if reorder {
            nearest_neighbor(&matrix)
        } else {
            (0..stops.len()).collect()
        };

        let legs_km = legs(&matrix, &order);
        let total_distance_km: f64 = legs_km.iter().sum();
        let estimated_duration_minutes =
            VehicleProfile::for_mode(mode).minutes_for(total_distance_km);
        debug!(total_distance_km, estimated_duration_minutes, "tour ready");

        Ok(Tour {
            ordered_stops: order.iter().map(|&i| stops[i].clone()).collect(),
            legs_km,
            total_distance_km,
            estimated_duration_minutes,
            transport_mode: mode,
        })
    }
}

/// Build a great-circle tour for a mode given by its identifier, e.g. `"CAR"`.
///
/// # Examples
/// ```
/// use route_planner::{build_tour, Stop};
///
/// let stops = vec![
///     Stop::numbered(1, 0.0, 0.0),
///     Stop::numbered(2, 0.0, 10.0),
///     Stop::numbered(3, 0.0, 1.0),
/// ];
/// let tour = build_tour(&stops, "CAR").unwrap();
/// let labels: Vec<_> = tour.ordered_stops.iter().map(|s| s.label.as_str()).collect();
/// assert_eq!(labels, ["Stop 1", "Stop 3", "Stop 2"]);
/// assert!(build_tour(&stops, "ROCKET").is_err());
/// ```
pub fn build_tour(stops: &[Stop], mode: &str) -> Result<Tour, RouteError> {
    let mode = resolve_mode(mode)?;
    TourBuilder::new(TourOptions::default()).build(stops, mode)
}

/// Measure a caller-ordered route for a mode given by its identifier.
pub fn measure_route(stops: &[Stop], mode: &str) -> Result<Tour, RouteError> {
    let mode = resolve_mode(mode)?;
    TourBuilder::new(TourOptions::default()).measure(stops, mode)
}

fn resolve_mode(mode: &str) -> Result<TransportMode, RouteError> {
    mode.parse().inspect_err(|err| warn!("{err}"))
}

/// Require an `expected x expected` matrix of finite, non-negative kilometres.
fn check_matrix(matrix: &[Vec<f64>], expected: usize) -> Result<(), RouteError> {
    if matrix.len() != expected || matrix.iter().any(|row| row.len() != expected) {
        return Err(RouteError::MalformedMatrix {
            expected,
            found: matrix.len(),
        });
    }

    for (from, row) in matrix.iter().enumerate() {
        for (to, &km) in row.iter().enumerate() {
            if !km.is_finite() || km < 0.0 {
                return Err(RouteError::InvalidDistance { from, to, km });
            }
        }
    }

    Ok(())
}

/// Visiting order starting at index 0.
///
/// Unvisited candidates are scanned in input order and only a strictly
/// smaller distance replaces the current best, so ties go to the earliest
/// stop.
fn nearest_neighbor(matrix: &[Vec<f64>]) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    order.push(current);

    while order.len() < n {
        let mut nearest: Option<(usize, f64)> = None;
        for candidate in (0..n).filter(|&i| !visited[i]) {
            let distance = matrix[current][candidate];
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((candidate, distance));
            }
        }

        let Some((next, distance)) = nearest else {
            break;
        };
        trace!(from = current, to = next, distance_km = distance, "nearest stop");
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

fn legs(matrix: &[Vec<f64>], order: &[usize]) -> Vec<f64> {
    order.windows(2).map(|pair| matrix[pair[0]][pair[1]]).collect()
}
