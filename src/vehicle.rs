//! Transport modes and their fixed speed profiles.
//!
//! Speeds are used only to estimate duration, never to pick the visiting
//! order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Enumerated vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    #[default]
    Car,
    Truck,
    Bike,
    Walk,
}

impl TransportMode {
    /// Identifier as callers spell it, e.g. `"CAR"`.
    pub fn id(self) -> &'static str {
        match self {
            TransportMode::Car => "CAR",
            TransportMode::Truck => "TRUCK",
            TransportMode::Bike => "BIKE",
            TransportMode::Walk => "WALK",
        }
    }

    pub fn profile(self) -> &'static VehicleProfile {
        VehicleProfile::for_mode(self)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TransportMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VEHICLE_PROFILES
            .iter()
            .find(|profile| profile.mode.id() == s)
            .map(|profile| profile.mode)
            .ok_or_else(|| RouteError::UnknownTransportMode(s.to_string()))
    }
}

/// A named speed class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleProfile {
    pub mode: TransportMode,
    /// Display name.
    pub name: &'static str,
    /// Average speed in km/h. Always positive.
    pub average_speed_kmh: f64,
}

/// Process-wide vehicle table, in presentation order.
pub static VEHICLE_PROFILES: [VehicleProfile; 4] = [
    VehicleProfile {
        mode: TransportMode::Car,
        name: "Car",
        average_speed_kmh: 50.0,
    },
    VehicleProfile {
        mode: TransportMode::Truck,
        name: "Truck",
        average_speed_kmh: 40.0,
    },
    VehicleProfile {
        mode: TransportMode::Bike,
        name: "Bike",
        average_speed_kmh: 15.0,
    },
    VehicleProfile {
        mode: TransportMode::Walk,
        name: "Walk",
        average_speed_kmh: 5.0,
    },
];

impl VehicleProfile {
    pub fn all() -> &'static [VehicleProfile] {
        &VEHICLE_PROFILES
    }

    pub fn for_mode(mode: TransportMode) -> &'static VehicleProfile {
        match mode {
            TransportMode::Car => &VEHICLE_PROFILES[0],
            TransportMode::Truck => &VEHICLE_PROFILES[1],
            TransportMode::Bike => &VEHICLE_PROFILES[2],
            TransportMode::Walk => &VEHICLE_PROFILES[3],
        }
    }

    /// Resolve a profile by its mode identifier.
    pub fn lookup(id: &str) -> Result<&'static VehicleProfile, RouteError> {
        id.parse::<TransportMode>().map(Self::for_mode)
    }

    /// Travel time in whole minutes for `km` at this profile's speed.
    ///
    /// Rounds half away from zero, which for non-negative distances is
    /// round-half-up: 7.5 minutes becomes 8.
    pub fn minutes_for(&self, km: f64) -> u64 {
        (km / self.average_speed_kmh * 60.0).round() as u64
    }
}
