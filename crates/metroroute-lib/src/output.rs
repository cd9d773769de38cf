use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{EdgeKind, Graph};
use crate::routing::{RouteMode, RoutePlan};
use crate::station::StationId;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Station visited along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: StationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Distance of the leg arriving at this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Kind of the leg arriving at this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<EdgeKind>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }

    fn display_line(&self) -> &str {
        self.line.as_deref().unwrap_or("?")
    }
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub mode: RouteMode,
    pub hops: usize,
    pub distance: f64,
    pub interchanges: usize,
    pub fare: u32,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved station names and legs.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut previous: Option<StationId> = None;
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let station = graph.station(id);
                let leg = previous.and_then(|from| graph.edge_between(from, id));
                previous = Some(id);
                RouteStep {
                    index,
                    id,
                    name: station.map(|s| s.name.clone()),
                    line: station.map(|s| s.line.clone()),
                    distance: leg.map(|edge| edge.distance),
                    via: leg.map(|edge| edge.kind),
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            mode: plan.mode,
            hops: plan.hop_count(),
            distance: plan.distance,
            interchanges: plan.interchanges,
            fare: plan.fare,
            steps,
        })
    }

    pub fn start(&self) -> &RouteStep {
        &self.steps[0]
    }

    pub fn goal(&self) -> &RouteStep {
        &self.steps[self.steps.len() - 1]
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self.mode {
            RouteMode::ShortestDistance => {
                let _ = writeln!(buffer, "Shortest distance: {:.2} km", self.distance);
            }
            RouteMode::MinimumFare => {
                let _ = writeln!(buffer, "Minimum fare route distance: {:.2} km", self.distance);
            }
            RouteMode::MinimumInterchanges => {
                let _ = writeln!(buffer, "Minimum line interchanges: {}", self.interchanges);
                let _ = writeln!(buffer, "Total distance: {:.2} km", self.distance);
            }
        }
        let _ = writeln!(buffer, "Fare: Rs {}/-", self.fare);

        let joined = self
            .steps
            .iter()
            .map(|step| format!("{} ({})", step.display_name(), step.display_line()))
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "Path: {joined}");
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}** — _{} → {}_ ({} hops, {:.2} km, {} interchanges, Rs {})",
            self.mode.label(),
            self.start().display_name(),
            self.goal().display_name(),
            self.hops,
            self.distance,
            self.interchanges,
            self.fare
        );
        for step in &self.steps {
            let leg = match (step.via, step.distance) {
                (Some(EdgeKind::Interchange), _) => " [interchange]".to_string(),
                (Some(EdgeKind::SameLine), Some(distance)) => format!(" +{distance:.2} km"),
                _ => String::new(),
            };
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`, {}){}",
                step.index,
                step.display_name(),
                step.id,
                step.display_line(),
                leg
            );
        }
        buffer
    }
}
