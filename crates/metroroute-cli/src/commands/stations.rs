use std::path::Path;

use anyhow::{bail, Result};

use metroroute_cli::output::OutputFormat;
use metroroute_lib::Station;

use super::load_graph;

pub fn handle_stations(
    target: Option<&Path>,
    line: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let graph = load_graph(target)?;

    let mut stations: Vec<&Station> = graph
        .stations()
        .filter(|station| line.is_none_or(|wanted| station.line.eq_ignore_ascii_case(wanted)))
        .collect();
    if let (Some(wanted), true) = (line, stations.is_empty()) {
        bail!(
            "Unknown line '{}'. Known lines: {}",
            wanted,
            graph.lines().join(", ")
        );
    }

    stations.sort_by(|a, b| {
        a.line
            .cmp(&b.line)
            .then(a.distance_from_line_start.total_cmp(&b.distance_from_line_start))
            .then(a.id.cmp(&b.id))
    });
    format.render_stations(&stations)
}

pub fn handle_lines(target: Option<&Path>, format: OutputFormat) -> Result<String> {
    let graph = load_graph(target)?;
    format.render_lines(&graph)
}
