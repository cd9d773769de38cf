use std::path::Path;

use anyhow::{Context, Result};

use metroroute_cli::output::OutputFormat;
use metroroute_lib::{plan_route, Error as RouteError, RouteMode, RouteRequest, RouteSummary};

use super::load_graph;

pub fn handle_route(
    target: Option<&Path>,
    from: &str,
    to: &str,
    mode: RouteMode,
    format: OutputFormat,
) -> Result<String> {
    let graph = load_graph(target)?;
    let request = RouteRequest::new(from, to, mode);
    let plan = plan_route(&graph, &request).map_err(handle_route_failure)?;
    let summary =
        RouteSummary::from_plan(&graph, &plan).context("failed to summarise planned route")?;
    format.render_route(&summary)
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownStation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!("No route found between {start} and {goal}.")
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_station_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{name}'.");
    match suggestions {
        [] => {}
        [only] => {
            message.push_str(&format!(" Did you mean '{only}'?"));
        }
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}
