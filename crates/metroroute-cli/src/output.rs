//! Output formatting for route, station and fare listings.

use std::fmt::Write;

use clap::ValueEnum;
use serde_json::json;

use metroroute_lib::fare::{FARE_TIERS, MAX_FARE};
use metroroute_lib::{Graph, RouteRenderMode, RouteSummary, Station};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Render a route summary in this format.
    pub fn render_route(self, summary: &RouteSummary) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Text => summary.render(RouteRenderMode::PlainText),
            OutputFormat::Rich => summary.render(RouteRenderMode::RichText),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(summary)?),
        })
    }

    /// Render a station listing ordered by line, then position on the line.
    pub fn render_stations(self, stations: &[&Station]) -> anyhow::Result<String> {
        if self == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(stations)?));
        }

        let mut buffer = String::new();
        let mut current_line: Option<&str> = None;
        for station in stations {
            if current_line != Some(station.line.as_str()) {
                current_line = Some(station.line.as_str());
                match self {
                    OutputFormat::Rich => {
                        let _ = writeln!(buffer, "**{}**", station.line);
                    }
                    _ => {
                        let _ = writeln!(buffer, "{}:", station.line);
                    }
                }
            }
            let _ = writeln!(
                buffer,
                "{:>5}  {} ({:.1} km)",
                station.id, station.name, station.distance_from_line_start
            );
        }
        Ok(buffer)
    }

    /// Render each line with its station count and length.
    pub fn render_lines(self, graph: &Graph) -> anyhow::Result<String> {
        let rows: Vec<(&str, usize, f64)> = graph
            .lines()
            .into_iter()
            .map(|line| {
                let (count, length) = graph
                    .stations()
                    .filter(|s| s.line == line)
                    .fold((0usize, 0.0f64), |(count, length), s| {
                        (count + 1, length.max(s.distance_from_line_start))
                    });
                (line, count, length)
            })
            .collect();

        if self == OutputFormat::Json {
            let value: Vec<_> = rows
                .iter()
                .map(|(line, stations, length)| {
                    json!({ "line": line, "stations": stations, "length_km": length })
                })
                .collect();
            return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
        }

        let mut buffer = String::new();
        for (line, count, length) in rows {
            let _ = writeln!(buffer, "{line}: {count} stations, {length:.1} km");
        }
        Ok(buffer)
    }

    /// Render the fare for a distance.
    pub fn render_fare(self, distance: f64, fare: u32) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Json => format!(
                "{}\n",
                serde_json::to_string_pretty(&json!({ "distance_km": distance, "fare": fare }))?
            ),
            _ => format!("Fare for {distance:.2} km: Rs {fare}/-\n"),
        })
    }

    /// Render the fare band table. The last row covers every longer journey.
    pub fn render_fare_table(self) -> anyhow::Result<String> {
        if self == OutputFormat::Json {
            let mut bands: Vec<_> = FARE_TIERS
                .iter()
                .map(|(limit, fare)| json!({ "up_to_km": limit, "fare": fare }))
                .collect();
            bands.push(json!({ "up_to_km": null, "fare": MAX_FARE }));
            return Ok(format!("{}\n", serde_json::to_string_pretty(&bands)?));
        }

        let mut buffer = String::new();
        for (limit, fare) in FARE_TIERS {
            let _ = writeln!(buffer, "Up to {limit} km: Rs {fare}/-");
        }
        if let Some((last, _)) = FARE_TIERS.last() {
            let _ = writeln!(buffer, "Over {last} km: Rs {MAX_FARE}/-");
        }
        Ok(buffer)
    }
}
