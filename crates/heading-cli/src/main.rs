use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use heading_solver::WindTriangle;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod render;

use render::{parse_legs, write_json, write_table, LegReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "heading-calc",
    about = "Compute true heading and ground speed from course, TAS and wind"
)]
struct Args {
    /// True course in degrees
    #[arg(long, short = 'c', default_value_t = 0)]
    course: i64,

    /// True airspeed
    #[arg(long, short = 's', default_value_t = 0)]
    tas: i64,

    /// Direction the wind blows from, in degrees
    #[arg(long = "wind-dir", short = 'd', default_value_t = 0)]
    wind_dir: i64,

    /// Wind speed, same unit as TAS
    #[arg(long = "wind-speed", short = 'w', default_value_t = 0)]
    wind_speed: i64,

    /// JSON file holding an array of legs; replaces the single-leg flags
    #[arg(long, conflicts_with_all = ["course", "tas", "wind_dir", "wind_speed"])]
    legs: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// More log output on stderr (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn collect_legs(args: &Args) -> Result<Vec<WindTriangle>> {
    if let Some(path) = &args.legs {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading legs file {}", path.display()))?;
        let legs = parse_legs(&raw).with_context(|| format!("parsing {}", path.display()))?;
        info!(count = legs.len(), path = %path.display(), "loaded legs");
        return Ok(legs);
    }

    let leg = WindTriangle::checked(args.course, args.tas, args.wind_dir, args.wind_speed)
        .context("invalid input")?;
    Ok(vec![leg])
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    debug!(?args, "starting");

    let reports: Vec<LegReport> = collect_legs(&args)?
        .into_iter()
        .map(LegReport::solve)
        .collect();

    let mut out = io::stdout().lock();
    match args.format {
        Format::Table => write_table(&mut out, &reports)?,
        Format::Json => write_json(&mut out, &reports)?,
    }
    out.flush()?;
    Ok(())
}
