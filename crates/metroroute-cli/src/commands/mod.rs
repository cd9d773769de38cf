pub mod fare;
pub mod route;
pub mod stations;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use metroroute_lib::{build_graph, load_stations, resolve_dataset_path, Graph};

/// Resolve the dataset, load it and build the station graph.
pub fn load_graph(target: Option<&Path>) -> Result<Graph> {
    let dataset_path =
        resolve_dataset_path(target).context("failed to locate the station dataset")?;
    let stations = load_stations(&dataset_path)
        .with_context(|| format!("failed to load dataset from {}", dataset_path.display()))?;
    let graph = build_graph(stations);
    info!(
        path = %dataset_path.display(),
        stations = graph.station_count(),
        "loaded dataset"
    );
    Ok(graph)
}
