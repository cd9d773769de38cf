//! Routing modes and their edge cost functions.
//!
//! All modes share one search engine; a mode only decides how much each edge
//! costs. Fare is monotonic in distance, so the fare mode prices edges by
//! distance and applies the fare table to the result.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::graph::{Edge, EdgeKind};

/// Optimization objective for a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Minimize physical distance.
    #[default]
    ShortestDistance,
    /// Minimize fare (searches by distance).
    MinimumFare,
    /// Minimize the number of line interchanges.
    MinimumInterchanges,
}

impl RouteMode {
    pub const ALL: [RouteMode; 3] = [
        RouteMode::ShortestDistance,
        RouteMode::MinimumFare,
        RouteMode::MinimumInterchanges,
    ];

    /// Search weight of `edge` under this mode. Never negative.
    pub fn weight(self, edge: &Edge) -> f64 {
        match self {
            RouteMode::ShortestDistance | RouteMode::MinimumFare => edge.distance,
            RouteMode::MinimumInterchanges => match edge.kind {
                EdgeKind::Interchange => 1.0,
                EdgeKind::SameLine => 0.0,
            },
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteMode::ShortestDistance => "Shortest distance",
            RouteMode::MinimumFare => "Minimum fare",
            RouteMode::MinimumInterchanges => "Minimum interchanges",
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::ShortestDistance => "distance",
            RouteMode::MinimumFare => "fare",
            RouteMode::MinimumInterchanges => "interchanges",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteMode {
    type Err = Error;

    /// Accepts the mode names as well as the menu numbers `1`, `2` and `3`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "distance" | "shortest" | "shortest_distance" => Ok(RouteMode::ShortestDistance),
            "2" | "fare" | "minimum_fare" => Ok(RouteMode::MinimumFare),
            "3" | "interchanges" | "interchange" | "minimum_interchanges" => {
                Ok(RouteMode::MinimumInterchanges)
            }
            _ => Err(Error::InvalidRouteMode {
                value: value.to_string(),
            }),
        }
    }
}
