// Plant Flights
// Command-line entry point: prints the next flight for a plant listing

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use plant_flights::models::flight::FlightYearInfo;
use plant_flights::models::plant::PlantRecord;
use plant_flights::models::policy::ShippingPolicy;
use plant_flights::services::config::FlightConfig;
use plant_flights::services::flight::{Clock, FixedClock, FlightScheduleService};
use plant_flights::utils::date::start_of_day;

const USAGE: &str = "\
Usage: plant-flights (--country <name> | --plant <file.json|->) [options]

Options:
  --now <YYYY-MM-DD[THH:MM:SS]>  Compute as of this local time instead of the clock
  --config <file.toml>           Read settings from this file
  -h, --help                     Show this message";

#[derive(Debug, Default)]
struct Args {
    country: Option<String>,
    plant_path: Option<String>,
    now: Option<NaiveDateTime>,
    config_path: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    policy: ShippingPolicy,
    #[serde(flatten)]
    info: FlightYearInfo,
}

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = match &args.config_path {
        Some(path) => FlightConfig::load(path)?,
        None => FlightConfig::load_default()?,
    };

    let plant = read_plant(&args)?;

    let service = match args.now {
        Some(now) => {
            let clock: Box<dyn Clock> = Box::new(FixedClock::new(now));
            FlightScheduleService::with_clock(&config, clock)
        }
        None => FlightScheduleService::from_config(&config)?,
    };

    let report = Report {
        policy: service.policy(&plant),
        info: service.year_info(&plant),
    };
    log::debug!("Flight report: {:?}", report.info);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Returns `None` when help was requested.
fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut args = Args::default();

    while let Some(flag) = raw.next() {
        let mut value = || {
            raw.next()
                .ok_or_else(|| anyhow!("missing value for {}\n\n{}", flag, USAGE))
        };
        match flag.as_str() {
            "-h" | "--help" => return Ok(None),
            "--country" => args.country = Some(value()?),
            "--plant" => args.plant_path = Some(value()?),
            "--now" => args.now = Some(parse_now(&value()?)?),
            "--config" => args.config_path = Some(PathBuf::from(value()?)),
            other => bail!("unrecognized argument '{}'\n\n{}", other, USAGE),
        }
    }

    if args.country.is_some() == args.plant_path.is_some() {
        bail!("pass exactly one of --country or --plant\n\n{}", USAGE);
    }
    Ok(Some(args))
}

fn parse_now(text: &str) -> Result<NaiveDateTime> {
    if let Ok(now) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(now);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid --now value '{}'", text))?;
    Ok(start_of_day(date))
}

fn read_plant(args: &Args) -> Result<PlantRecord> {
    if let Some(country) = &args.country {
        return Ok(PlantRecord::with_country(country.as_str()));
    }

    let path = args.plant_path.as_deref().unwrap_or("-");
    let data = if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read plant record from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read plant record from {}", path))?
    };

    serde_json::from_str(&data).with_context(|| format!("failed to parse plant record from {}", path))
}
