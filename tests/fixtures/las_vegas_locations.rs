//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

#![allow(dead_code)]

use route_planner::Stop;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Stop for this location, keyed by its position in a fixture list.
    pub fn stop(&self, id: i64) -> Stop {
        Stop::new(id, self.name, self.lat, self.lng)
    }
}

/// Stops for a fixture slice, ids numbered from 1.
pub fn stops_from(locations: &[Location]) -> Vec<Stop> {
    locations
        .iter()
        .zip(1..)
        .map(|(location, id)| location.stop(id))
        .collect()
}

/// Every fixture location as one delivery day, ids numbered from 1.
pub fn all_stops() -> Vec<Stop> {
    let all: Vec<Location> = CASINOS
        .iter()
        .chain(STRIP_RESTAURANTS)
        .chain(HENDERSON_LOCATIONS)
        .chain(SOUTH_STRIP_LOCATIONS)
        .cloned()
        .collect();
    stops_from(&all)
}

// ============================================================================
// Major Casinos / Hotels (good depot candidates)
// ============================================================================

pub const CASINOS: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
];

// ============================================================================
// Las Vegas Strip Area Restaurants
// ============================================================================

pub const STRIP_RESTAURANTS: &[Location] = &[
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("SW Steakhouse", 36.1262145, -115.1669146),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Hash House A Go Go", 36.1181377, -115.1710989),
    Location::new("Otto Pizzeria", 36.1231219, -115.1684514),
    Location::new("Bacchanal Buffet", 36.1159581, -115.1762929),
    Location::new("Il Fornaio", 36.1024474, -115.1740110),
    Location::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
];

// ============================================================================
// Henderson / East Las Vegas Area
// ============================================================================

pub const HENDERSON_LOCATIONS: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("RibCage", 35.9949754, -115.0999810),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

// ============================================================================
// South Strip / Airport Area
// ============================================================================

pub const SOUTH_STRIP_LOCATIONS: &[Location] = &[
    Location::new("Buffalo Wild Wings South", 36.0543044, -115.1714860),
    Location::new("Dickey's Barbecue Pit", 36.0544257, -115.1715391),
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Location::new("Denny's South", 36.0591086, -115.1717250),
    Location::new("Mikos Izakaya", 36.0429503, -115.1527627),
    Location::new("Pyramid Cafe", 36.0956586, -115.1761902),
];
