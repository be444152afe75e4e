//! Error types raised by the route planner.

use thiserror::Error;

/// Errors raised while measuring or building a tour.
///
/// Every variant is a caller contract violation detected at the call
/// boundary. Nothing here is transient, so nothing is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Latitude outside `[-90, 90]`, longitude outside `[-180, 180]`, or a
    /// non-finite component.
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Latitude in degrees as supplied.
        latitude: f64,
        /// Longitude in degrees as supplied.
        longitude: f64,
    },
    /// The transport mode id does not match any vehicle profile.
    #[error("unknown transport mode {0:?}")]
    UnknownTransportMode(String),
    /// A distance matrix provider returned a matrix of the wrong shape.
    #[error("distance matrix must be {expected}x{expected}, found {found} rows or a ragged row")]
    MalformedMatrix {
        /// Number of locations requested.
        expected: usize,
        /// Number of rows returned.
        found: usize,
    },
    /// A distance matrix provider returned a negative or non-finite distance.
    #[error("distance from location {from} to {to} is {km}, expected a finite non-negative value")]
    InvalidDistance {
        /// Row index of the offending cell.
        from: usize,
        /// Column index of the offending cell.
        to: usize,
        /// Value returned by the provider.
        km: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_names_the_identifier() {
        let err = RouteError::UnknownTransportMode("ROCKET".to_string());
        assert_eq!(err.to_string(), "unknown transport mode \"ROCKET\"");
    }

    #[test]
    fn invalid_coordinate_reports_both_components() {
        let err = RouteError::InvalidCoordinate {
            latitude: 91.0,
            longitude: 10.0,
        };
        assert_eq!(err.to_string(), "invalid coordinate (91, 10)");
    }

    #[test]
    fn invalid_distance_locates_the_cell() {
        let err = RouteError::InvalidDistance {
            from: 0,
            to: 2,
            km: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "distance from location 0 to 2 is -1.5, expected a finite non-negative value"
        );
    }
}
