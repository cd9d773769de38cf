//! Station dataset location and CSV ingestion.
//!
//! The dataset is a CSV table with one row per (station, line) pair and the
//! columns `id, name, distance from line start, line, opening date, layout,
//! latitude, longitude`. The first row is a header. Ingestion is lenient in
//! the same places the network data tends to be sloppy: short rows are
//! skipped, and unparsable numeric fields default to `0.0` with a warning.

use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::station::{Station, StationId, StationTable};

/// Default filename for the station dataset.
pub const DATASET_FILENAME: &str = "Delhi-Metro-Network.csv";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "METROROUTE_DATASET";

/// Minimum number of fields a row must carry to describe a station.
const EXPECTED_COLUMNS: usize = 8;

/// Resolve the platform-specific dataset location.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "metroroute", "metroroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Locate the dataset file.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `METROROUTE_DATASET` environment variable.
/// 3. `Delhi-Metro-Network.csv` in the current working directory.
/// 4. Platform-specific project data directory.
///
/// A directory in steps 1 or 2 resolves to the default filename inside it.
/// Returns [`Error::DatasetNotFound`] when the resolved file does not exist.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    let candidate = candidate_path(target, env::var_os(DATASET_ENV_VAR), &cwd)?;
    if candidate.is_file() {
        debug!(path = %candidate.display(), "resolved dataset path");
        Ok(candidate)
    } else {
        Err(Error::DatasetNotFound { path: candidate })
    }
}

fn candidate_path(target: Option<&Path>, env_value: Option<OsString>, cwd: &Path) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_dataset_path(explicit));
    }

    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return Ok(canonical_dataset_path(Path::new(&value)));
    }

    let local = cwd.join(DATASET_FILENAME);
    if local.is_file() {
        return Ok(local);
    }

    default_dataset_path()
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DATASET_FILENAME)
    } else {
        path.to_path_buf()
    }
}

/// Load the station table from a CSV file.
pub fn load_stations(path: &Path) -> Result<StationTable> {
    if !path.is_file() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let stations = load_stations_from_reader(file)?;
    debug!(path = %path.display(), stations = stations.len(), "loaded station dataset");
    Ok(stations)
}

/// Load the station table from any CSV source (file or in-memory buffer).
///
/// Duplicate ids overwrite earlier rows.
pub fn load_stations_from_reader<R: Read>(reader: R) -> Result<StationTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let found = csv_reader.headers()?.len();
    if found < EXPECTED_COLUMNS {
        return Err(Error::MissingColumns {
            expected: EXPECTED_COLUMNS,
            found,
        });
    }

    let mut stations = StationTable::new();
    let mut skipped_rows = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        match parse_station(&record) {
            Some(station) => {
                if let Some(previous) = stations.insert(station.id, station) {
                    warn!(id = previous.id, "duplicate station id; keeping the later row");
                }
            }
            None => skipped_rows += 1,
        }
    }

    if skipped_rows > 0 {
        warn!(skipped_rows, "ignored dataset rows that do not describe a station");
    }

    Ok(stations)
}

fn parse_station(record: &StringRecord) -> Option<Station> {
    let row = row_number(record);
    if record.len() < EXPECTED_COLUMNS {
        warn!(row, fields = record.len(), "skipping short dataset row");
        return None;
    }

    let raw_id = record.get(0).unwrap_or_default().trim();
    let id: StationId = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            warn!(row, value = raw_id, "skipping dataset row with invalid station id");
            return None;
        }
    };

    let field = |index: usize| record.get(index).unwrap_or_default();

    Some(Station {
        id,
        name: field(1).to_string(),
        distance_from_line_start: parse_number(field(2), "distance", row),
        line: field(3).to_string(),
        opening_date: field(4).to_string(),
        layout: field(5).to_string(),
        latitude: parse_number(field(6), "latitude", row),
        longitude: parse_number(field(7), "longitude", row),
    })
}

/// Parse a numeric field, falling back to `0.0` with a diagnostic.
fn parse_number(raw: &str, column: &'static str, row: u64) -> f64 {
    let value = raw.trim();
    if value.is_empty() {
        warn!(row, column, "empty number field; treated as 0.0");
        return 0.0;
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => {
            warn!(row, column, value, "invalid number; treated as 0.0");
            0.0
        }
    }
}

fn row_number(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}
