use crate::{
    adapters::json,
    config::{self, Config},
};
use anyhow::{Context as _, Result};
use clap::Parser;
use geosort_core::{usecases, value::Value};
use geosort_entities::geo::MapPoint;
use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

/// Sort a JSON array (or the values of a JSON object)
/// by the distance of a nested location to a center point.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Center point in decimal degrees
    #[arg(
        long,
        value_name = "LAT,LON",
        allow_hyphen_values = true,
        value_parser = config::parse_center
    )]
    center: Option<MapPoint>,

    /// Dotted path from an element to its location
    #[arg(long, value_name = "PATH")]
    field: Option<String>,

    /// Pretty print the result
    #[arg(long)]
    pretty: bool,

    /// JSON input file (default: stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let input = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Could not read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read from stdin")?;
            buf
        }
    };
    Ok(input)
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    let field_path = args.field.unwrap_or(cfg.sort.field_path);
    let center = args.center.unwrap_or(cfg.center);
    let pretty = args.pretty || cfg.output.pretty;

    let input = read_input(args.input.as_deref())?;
    let seq = json::from_str(&input)?;

    log::debug!("Sort by '{field_path}' around {center}");
    let sorted = usecases::sort_by_distance(
        Some(&seq),
        &Value::from(field_path),
        &Value::from(center.lat()),
        &Value::from(center.lon()),
    )?;
    log::info!("Sorted {} elements", sorted.len());

    println!("{}", json::to_string(sorted, pretty)?);
    Ok(())
}
