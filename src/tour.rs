//! Tours: stops in visiting order plus derived distance and duration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stop::Stop;
use crate::vehicle::TransportMode;

/// An ordered visit sequence with its metrics.
///
/// A tour is a derived value: it is recomputed from scratch for every
/// `(stops, mode)` request and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// The input stops permuted into visiting order.
    pub ordered_stops: Vec<Stop>,
    /// Distance of each consecutive leg; one shorter than the tour.
    pub legs_km: Vec<f64>,
    /// Sum of `legs_km`.
    pub total_distance_km: f64,
    /// `total_distance_km` at the mode's average speed, rounded to whole minutes.
    pub estimated_duration_minutes: u64,
    /// Mode whose speed produced the estimate.
    pub transport_mode: TransportMode,
}

impl Tour {
    /// Tour with no distance to cover.
    pub(crate) fn stationary(ordered_stops: Vec<Stop>, transport_mode: TransportMode) -> Self {
        Self {
            ordered_stops,
            legs_km: Vec::new(),
            total_distance_km: 0.0,
            estimated_duration_minutes: 0,
            transport_mode,
        }
    }

    pub fn len(&self) -> usize {
        self.ordered_stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_stops.is_empty()
    }

    /// Coordinates in visiting order, for drawing the route line.
    pub fn path(&self) -> Vec<(f64, f64)> {
        self.ordered_stops.iter().map(Stop::location).collect()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Distance: {:.1} km, Estimated Duration: {} mins",
            self.total_distance_km, self.estimated_duration_minutes
        )
    }
}
