//! Metro network routing library entry points.
//!
//! This crate loads a tabular station dataset, builds the network graph
//! (same-line edges plus zero-distance interchanges between same-named
//! stations), and answers shortest-path queries by distance, fare or number
//! of interchanges. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod fare;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod station;

pub use dataset::{
    default_dataset_path, load_stations, load_stations_from_reader, resolve_dataset_path,
};
pub use error::{Error, Result};
pub use fare::fare;
pub use graph::{build_graph, Edge, EdgeKind, Graph};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{derive_metrics, find_path, PathMetrics, PathResult};
pub use routing::{plan_route, RouteMode, RoutePlan, RouteRequest};
pub use station::{canonical_name, Station, StationId, StationTable};
