//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use metroroute_lib::{build_graph, load_stations, Graph, Station, StationId, StationTable};

/// Path to the checked-in sample network.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.csv")
}

/// Graph built from the sample network fixture.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    build_graph(load_stations(&fixture_path()).expect("fixture loads"))
}

/// Minimal station record; only the routing-relevant fields are meaningful.
#[allow(dead_code)]
pub fn station(id: StationId, name: &str, line: &str, distance: f64) -> Station {
    Station {
        id,
        name: name.to_string(),
        distance_from_line_start: distance,
        line: line.to_string(),
        opening_date: String::new(),
        layout: String::new(),
        latitude: 0.0,
        longitude: 0.0,
    }
}

/// Build a station table from records.
#[allow(dead_code)]
pub fn table(stations: impl IntoIterator<Item = Station>) -> StationTable {
    stations.into_iter().map(|s| (s.id, s)).collect()
}

/// Line-one/line-two network: A(0) - B(5) - C(12) on line 1, with B shared
/// by line 2 as B'(0) - D(4).
#[allow(dead_code)]
pub fn two_line_graph() -> Graph {
    build_graph(table([
        station(1, "A", "Line 1", 0.0),
        station(2, "B [Conn: Line 2]", "Line 1", 5.0),
        station(3, "C", "Line 1", 12.0),
        station(4, "B", "Line 2", 0.0),
        station(5, "D", "Line 2", 4.0),
    ]))
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
