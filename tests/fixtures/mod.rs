//! Test fixtures for route-planner.
//!
//! Provides real Las Vegas / Henderson locations (from OpenStreetMap)
//! and helpers to turn them into stops.

pub mod las_vegas_locations;
