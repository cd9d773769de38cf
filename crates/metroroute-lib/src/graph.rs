use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::station::{Station, StationId, StationTable};

/// Minimum similarity score for a station name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Classification for the edge used in the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Consecutive stations on the same line.
    SameLine,
    /// Zero-distance transfer between same-named stations.
    Interchange,
}

/// Directed edge within the routing graph. Every connection is stored once
/// per direction with identical distance and kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: StationId,
    pub kind: EdgeKind,
    /// Physical distance in km.
    pub distance: f64,
}

/// Metro network: station table plus adjacency lists.
///
/// Built once by [`build_graph`] and read-only afterwards. Both tables are
/// shared behind `Arc`, so clones are cheap and may be handed to other threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Arc<HashMap<StationId, Station>>,
    adjacency: Arc<HashMap<StationId, Vec<Edge>>>,
}

impl Graph {
    /// Lookup a station by identifier.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Iterate over all stations in unspecified order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of directed edge entries (two per undirected connection).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Return the neighbours for a given station identifier.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First edge from `from` to `to` in adjacency order.
    ///
    /// Parallel edges can exist between the same pair; callers get the first
    /// one inserted, which is deterministic for a given station table.
    pub fn edge_between(&self, from: StationId, to: StationId) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    /// Distinct line names in sorted order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.stations.values().map(|s| s.line.as_str()).collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Stations whose canonical name matches `name` (ignoring ASCII case and
    /// surrounding whitespace), sorted by identifier.
    pub fn station_ids_by_name(&self, name: &str) -> Vec<StationId> {
        let wanted = crate::station::canonical_name(name.trim());
        let mut ids: Vec<StationId> = self
            .stations
            .values()
            .filter(|station| {
                station
                    .canonical_name()
                    .trim_start()
                    .eq_ignore_ascii_case(wanted)
            })
            .map(|station| station.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Canonical station names similar to `name`, best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.trim().to_lowercase();
        let mut scored: BTreeMap<&str, f64> = BTreeMap::new();
        for station in self.stations.values() {
            let candidate = station.canonical_name().trim_start();
            let score = strsim::jaro_winkler(&wanted, &candidate.to_lowercase());
            if score >= SUGGESTION_THRESHOLD {
                scored.insert(candidate, score);
            }
        }

        let mut ranked: Vec<(&str, f64)> = scored.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
            .into_iter()
            .take(limit)
            .map(|(candidate, _)| candidate.to_string())
            .collect()
    }
}

/// Build the routing graph from a station table.
///
/// Same-line edges connect consecutive stations of each line ordered by
/// distance from the line origin. Interchange edges (distance `0.0`) connect
/// every pair of stations sharing a canonical name. Stations are visited in
/// id order so the adjacency lists come out identical for identical input.
pub fn build_graph(stations: StationTable) -> Graph {
    let mut adjacency: HashMap<StationId, Vec<Edge>> =
        stations.keys().map(|&id| (id, Vec::new())).collect();

    let mut ordered: Vec<&Station> = stations.values().collect();
    ordered.sort_by_key(|station| station.id);

    let same_line = build_same_line_edges(&ordered, &mut adjacency);
    let interchanges = build_interchange_edges(&ordered, &mut adjacency);

    debug!(
        stations = stations.len(),
        same_line_edges = same_line,
        interchange_edges = interchanges,
        "built metro graph"
    );

    Graph {
        stations: Arc::new(stations),
        adjacency: Arc::new(adjacency),
    }
}

fn build_same_line_edges(
    ordered: &[&Station],
    adjacency: &mut HashMap<StationId, Vec<Edge>>,
) -> usize {
    let mut lines: BTreeMap<&str, Vec<&Station>> = BTreeMap::new();
    for &station in ordered {
        lines.entry(station.line.as_str()).or_default().push(station);
    }

    let mut count = 0usize;
    for stations_on_line in lines.values_mut() {
        // Stable sort: equal distances keep id order.
        stations_on_line.sort_by(|a, b| {
            a.distance_from_line_start
                .total_cmp(&b.distance_from_line_start)
        });

        for pair in stations_on_line.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let distance =
                (current.distance_from_line_start - previous.distance_from_line_start).abs();
            connect(adjacency, previous.id, current.id, distance, EdgeKind::SameLine);
            count += 1;
        }
    }
    count
}

fn build_interchange_edges(
    ordered: &[&Station],
    adjacency: &mut HashMap<StationId, Vec<Edge>>,
) -> usize {
    let mut groups: BTreeMap<&str, Vec<StationId>> = BTreeMap::new();
    for &station in ordered {
        groups
            .entry(station.canonical_name())
            .or_default()
            .push(station.id);
    }

    let mut count = 0usize;
    for ids in groups.values().filter(|ids| ids.len() > 1) {
        for (i, &u) in ids.iter().enumerate() {
            for &v in &ids[i + 1..] {
                connect(adjacency, u, v, 0.0, EdgeKind::Interchange);
                count += 1;
            }
        }
    }
    count
}

fn connect(
    adjacency: &mut HashMap<StationId, Vec<Edge>>,
    u: StationId,
    v: StationId,
    distance: f64,
    kind: EdgeKind,
) {
    adjacency.entry(u).or_default().push(Edge {
        target: v,
        kind,
        distance,
    });
    adjacency.entry(v).or_default().push(Edge {
        target: u,
        kind,
        distance,
    });
}
