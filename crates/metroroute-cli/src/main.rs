mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metroroute_cli::output::OutputFormat;
use metroroute_lib::RouteMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Metro network route planner")]
struct Cli {
    /// Override the station dataset file or directory.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two stations, given by name or id.
    Route {
        /// Starting station name or id.
        #[arg(long = "from")]
        from: String,
        /// Destination station name or id.
        #[arg(long = "to")]
        to: String,
        /// Optimization objective: distance, fare or interchanges (or 1, 2, 3).
        #[arg(long, default_value = "distance", value_parser = parse_mode)]
        mode: RouteMode,
    },
    /// List stations, optionally restricted to one line.
    Stations {
        /// Only list stations on this line (case-insensitive).
        #[arg(long)]
        line: Option<String>,
    },
    /// List the lines in the dataset.
    Lines,
    /// Look up the fare for a journey distance, or list the fare bands.
    Fare {
        /// Journey distance in km; omit to print every band.
        #[arg(value_name = "DISTANCE_KM", allow_negative_numbers = true)]
        distance: Option<f64>,
    },
}

fn parse_mode(value: &str) -> std::result::Result<RouteMode, String> {
    value.parse::<RouteMode>().map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    let output = match cli.command {
        Command::Route { from, to, mode } => {
            commands::route::handle_route(dataset, &from, &to, mode, cli.format)?
        }
        Command::Stations { line } => {
            commands::stations::handle_stations(dataset, line.as_deref(), cli.format)?
        }
        Command::Lines => commands::stations::handle_lines(dataset, cli.format)?,
        Command::Fare { distance } => commands::fare::handle_fare(distance, cli.format)?,
    };
    print!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
