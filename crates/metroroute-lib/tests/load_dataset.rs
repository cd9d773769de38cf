mod common;

use std::fs;

use common::fixture_path;
use metroroute_lib::{load_stations, resolve_dataset_path, Error};

#[test]
fn fixture_loads_all_station_rows() {
    let stations = load_stations(&fixture_path()).expect("fixture loads");
    assert_eq!(stations.len(), 27);

    let kashmere = &stations[&4];
    assert_eq!(kashmere.name, "Kashmere Gate [Conn: Yellow, Violet]");
    assert_eq!(kashmere.canonical_name(), "Kashmere Gate");
    assert_eq!(kashmere.line, "Red line");
    assert_eq!(kashmere.distance_from_line_start, 14.6);
}

#[test]
fn malformed_coordinates_default_to_zero() {
    let stations = load_stations(&fixture_path()).expect("fixture loads");
    let pari_chowk = &stations[&61];
    assert_eq!(pari_chowk.latitude, 0.0);
    assert_eq!(pari_chowk.longitude, 77.5104);
}

#[test]
fn explicit_directory_resolves_default_filename() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dataset = dir.path().join(metroroute_lib::dataset::DATASET_FILENAME);
    fs::copy(fixture_path(), &dataset).expect("copy fixture");

    let resolved = resolve_dataset_path(Some(dir.path())).expect("dataset resolves");
    assert_eq!(resolved, dataset);
    assert_eq!(load_stations(&resolved).expect("loads").len(), 27);
}

#[test]
fn explicit_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.csv");
    let err = resolve_dataset_path(Some(&missing)).expect_err("missing dataset");
    match err {
        Error::DatasetNotFound { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn windows_line_endings_are_accepted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("crlf.csv");
    fs::write(
        &path,
        "ID,Name,Dist,Line,Opened,Layout,Lat,Lon\r\n1,Alpha,0,L1,,,1.5,2.5\r\n2,Beta,3,L1,,,1.5,2.5\r\n",
    )
    .expect("write dataset");

    let stations = load_stations(&path).expect("loads");
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[&2].distance_from_line_start, 3.0);
    assert_eq!(stations[&1].longitude, 2.5);
}
