//! Seams between the tour builder and its distance source.
//!
//! The builder only needs pairwise kilometres; where they come from is
//! pluggable so tests can substitute a synthetic metric.

use crate::error::RouteError;

/// Provides a distance matrix in kilometres for a set of locations.
///
/// The matrix is indexed by the provided location order and must be
/// `n x n` for `n` locations.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<Vec<Vec<f64>>, RouteError>;
}

impl<T: DistanceMatrixProvider + ?Sized> DistanceMatrixProvider for &T {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<Vec<Vec<f64>>, RouteError> {
        (**self).matrix_for(locations)
    }
}
