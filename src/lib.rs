//! route-planner core
//!
//! Orders a set of geographic stops into a visiting sequence with a
//! nearest-neighbor heuristic and estimates distance and travel time for a
//! transport mode. Distances are great-circle, not road-network.

pub mod error;
pub mod haversine;
pub mod solver;
pub mod stop;
pub mod tour;
pub mod traits;
pub mod vehicle;

pub use error::RouteError;
pub use haversine::{HaversineMatrix, distance};
pub use solver::{TourBuilder, TourOptions, build_tour, measure_route};
pub use stop::{Stop, StopId};
pub use tour::Tour;
pub use traits::DistanceMatrixProvider;
pub use vehicle::{TransportMode, VEHICLE_PROFILES, VehicleProfile};
