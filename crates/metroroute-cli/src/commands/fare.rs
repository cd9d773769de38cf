use anyhow::{bail, Result};

use metroroute_cli::output::OutputFormat;
use metroroute_lib::fare;

pub fn handle_fare(distance: Option<f64>, format: OutputFormat) -> Result<String> {
    let Some(distance) = distance else {
        return format.render_fare_table();
    };
    if !distance.is_finite() {
        bail!("distance must be a finite number of km, got {distance}");
    }
    format.render_fare(distance, fare(distance))
}
