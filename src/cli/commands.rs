use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;
use tracing::{info, warn, Level};
use validator::Validate;

use crate::analyzers::{aggregate_trend, SchemeAnalyzer};
use crate::cli::args::{Cli, Commands};
use crate::error::{InsightsError, Result};
use crate::processors::{BatchSummary, GpsBatchProcessor, GpsOutcome};
use crate::readers::{GpsReader, ObservationReader, SchemeReader};
use crate::settings::Settings;
use crate::utils::coordinates::parse_coordinates;

#[derive(Serialize)]
struct CoordinateOutput {
    latitude: f64,
    longitude: f64,
    formatted: String,
}

#[derive(Serialize)]
struct BatchOutput {
    summary: BatchSummary,
    results: Vec<GpsOutcome>,
}

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref(), &cli.overrides)?;
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        settings.log_level()?
    };
    init_logging(level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Gps { text } => {
            let text = text.join(" ");
            let coordinate = parse_coordinates(&text)?;
            if let Err(e) = coordinate.validate() {
                warn!(%coordinate, "coordinate outside valid range: {}", e);
            }

            print_json(&CoordinateOutput {
                latitude: coordinate.latitude(),
                longitude: coordinate.longitude(),
                formatted: coordinate.to_hemisphere_string(),
            })?;
        }

        Commands::GpsBatch {
            input,
            column,
            max_workers,
        } => {
            let column = column.unwrap_or_else(|| settings.gps_column.clone());
            info!(input = %input.display(), %column, max_workers, "parsing GPS batch");

            let bytes = tokio::fs::read(&input).await?;
            let entries = GpsReader::with_column(&column).parse_entries(&bytes)?;

            let processor = GpsBatchProcessor::new(max_workers);
            let results = tokio::task::spawn_blocking(move || processor.process(&entries)).await??;

            print_json(&BatchOutput {
                summary: BatchSummary::from_outcomes(&results),
                results,
            })?;
        }

        Commands::Trend {
            input,
            granularity,
            start,
            end,
            no_headers,
        } => {
            let granularity = granularity.unwrap_or(settings.default_granularity);
            info!(input = %input.display(), %granularity, "aggregating trend");

            let bytes = tokio::fs::read(&input).await?;
            let observations = ObservationReader::with_headers(!no_headers).parse_observations(&bytes)?;

            let series = aggregate_trend(&observations, granularity, start, end)?;
            print_json(&series)?;
        }

        Commands::Breakdown { input, kind } => {
            info!(input = %input.display(), %kind, "building breakdown");

            let bytes = tokio::fs::read(&input).await?;
            let rows = ObservationReader::new().parse_category_counts(&bytes)?;

            print_json(&kind.build(&rows))?;
        }

        Commands::Analytics { input, strict } => {
            info!(input = %input.display(), strict, "analyzing schemes");

            let bytes = tokio::fs::read(&input).await?;
            let schemes = SchemeReader::with_strict_validation(strict).parse_schemes(&bytes)?;

            let analytics = SchemeAnalyzer::new().analyze(&schemes);
            info!("{}", analytics.statistics.summary());
            print_json(&analytics)?;
        }
    }

    Ok(())
}

/// Install the global fmt subscriber, writing to stderr or appending to `log_file`.
fn init_logging(level: Level, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(level);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| InsightsError::Config(format!("failed to initialise logging: {}", e)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
