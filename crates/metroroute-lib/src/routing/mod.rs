//! Route planning on top of the metro graph.
//!
//! This module provides:
//! - [`RouteMode`] - Supported optimization objectives (distance, fare, interchanges)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result with distance, interchanges and fare
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```ignore
//! use metroroute_lib::{build_graph, load_stations, plan_route, RouteMode, RouteRequest};
//!
//! let graph = build_graph(load_stations("Delhi-Metro-Network.csv".as_ref())?);
//! let request = RouteRequest::new("Dwarka", "Kashmere Gate", RouteMode::MinimumInterchanges);
//! let plan = plan_route(&graph, &request)?;
//! println!("{} interchanges, Rs {}", plan.interchanges, plan.fare);
//! ```

mod mode;

pub use mode::RouteMode;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fare::fare;
use crate::graph::Graph;
use crate::path::{derive_metrics, find_path, PathResult};
use crate::station::StationId;

/// Number of name suggestions offered for an unknown station.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route planning request.
///
/// Endpoints are either numeric station ids or station names. A name matches
/// every station sharing its canonical name, one per line served. Numeric
/// input is read as an id first and falls back to a name match when no
/// station has that id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub mode: RouteMode,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, mode: RouteMode) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            mode,
        }
    }

    /// Convenience constructor for shortest-distance routes.
    pub fn distance(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteMode::ShortestDistance)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub mode: RouteMode,
    pub start: StationId,
    pub goal: StationId,
    pub steps: Vec<StationId>,
    /// Search cost under `mode` (km, or interchanges for the interchange mode).
    pub cost: f64,
    /// Physical distance in km along `steps`.
    pub distance: f64,
    pub interchanges: usize,
    pub fare: u32,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a request endpoint to candidate station ids.
///
/// Numeric input naming a station in the graph is taken as its id. Otherwise
/// the input is matched by name, so stations named by a number stay
/// reachable. A number matching neither is still passed through as an id and
/// the search reports it as unreachable.
fn resolve_station(graph: &Graph, query: &str) -> Result<Vec<StationId>> {
    let numeric = query.trim().parse::<StationId>().ok();
    if let Some(id) = numeric.filter(|&id| graph.contains(id)) {
        return Ok(vec![id]);
    }

    let ids = graph.station_ids_by_name(query);
    if !ids.is_empty() {
        return Ok(ids);
    }
    if let Some(id) = numeric {
        return Ok(vec![id]);
    }
    Err(Error::UnknownStation {
        name: query.to_string(),
        suggestions: graph.fuzzy_station_matches(query, MAX_SUGGESTIONS),
    })
}

/// Search every start/goal candidate pair and keep the cheapest result.
/// Equal costs prefer fewer stations, then the pair with the lowest ids.
fn best_path(
    graph: &Graph,
    starts: &[StationId],
    goals: &[StationId],
    mode: RouteMode,
) -> PathResult {
    let mut best = PathResult::not_found();
    for &start in starts {
        for &goal in goals {
            let candidate = find_path(graph, start, goal, |edge| mode.weight(edge));
            if candidate.is_found() && (!best.is_found() || improves(&candidate, &best)) {
                best = candidate;
            }
        }
    }
    best
}

fn improves(candidate: &PathResult, best: &PathResult) -> bool {
    candidate.cost < best.cost
        || (candidate.cost == best.cost && candidate.steps.len() < best.steps.len())
}

/// Compute a route using the requested mode.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves endpoint ids or names
/// 2. Runs the shortest-path search with the mode's edge weight
/// 3. Re-derives distance and interchanges from the edges actually used
/// 4. Applies the fare table to the distance
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let starts = resolve_station(graph, &request.start)?;
    let goals = resolve_station(graph, &request.goal)?;

    let result = best_path(graph, &starts, &goals, request.mode);
    let (Some(&start), Some(&goal)) = (result.steps.first(), result.steps.last()) else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    let metrics = derive_metrics(graph, &result.steps);
    debug!(
        mode = %request.mode,
        start,
        goal,
        hops = result.steps.len() - 1,
        cost = result.cost,
        distance = metrics.distance,
        interchanges = metrics.interchanges,
        "planned route"
    );

    Ok(RoutePlan {
        mode: request.mode,
        start,
        goal,
        steps: result.steps,
        cost: result.cost,
        distance: metrics.distance,
        interchanges: metrics.interchanges,
        fare: fare(metrics.distance),
    })
}
