//! Stops: the geographic points a tour visits.
//!
//! Stops are owned by the caller. The planner borrows them for one
//! computation and hands back owned copies in visiting order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque stop identifier, stable across reorderings.
///
/// Serializes untagged, so `"a1"`, `42` and `-7` are all accepted in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopId::Number(n) => write!(f, "{n}"),
            StopId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StopId {
    fn from(value: i64) -> Self {
        StopId::Number(value)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        StopId::Text(value.to_string())
    }
}

impl From<String> for StopId {
    fn from(value: String) -> Self {
        StopId::Text(value)
    }
}

/// A point of interest to visit.
///
/// Two stops may share identical coordinates; they are never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    /// Display name. Has no effect on routing.
    #[serde(alias = "name")]
    pub label: String,
    /// Degrees, `[-90, 90]`.
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Degrees, `[-180, 180]`.
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Stop {
    pub fn new(
        id: impl Into<StopId>,
        label: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            latitude,
            longitude,
        }
    }

    /// Stop dropped on the map without a name: id `n`, labelled `Stop {n}`.
    pub fn numbered(n: i64, latitude: f64, longitude: f64) -> Self {
        Self::new(n, format!("Stop {n}"), latitude, longitude)
    }

    /// Location as a `(lat, lng)` tuple.
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }
}
