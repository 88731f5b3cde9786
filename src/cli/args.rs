use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analyzers::BreakdownKind;
use crate::models::Granularity;

#[derive(Parser)]
#[command(name = "irrigation-insights")]
#[command(about = "GPS parsing and dashboard aggregation for irrigation scheme assessments")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,

    #[arg(
        long = "set",
        global = true,
        help = "Override a setting, e.g. --set default_granularity=weekly"
    )]
    pub overrides: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single GPS coordinate string into decimal degrees
    Gps {
        #[arg(
            required = true,
            num_args = 1..,
            allow_hyphen_values = true,
            help = "Coordinate text, e.g. '0.6341° N, 35.7364° E' or '-0.6341, 35.7364'"
        )]
        text: Vec<String>,
    },

    /// Parse every GPS value in a submissions CSV export
    GpsBatch {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,

        #[arg(long, help = "Column holding the GPS text [default: from settings]")]
        column: Option<String>,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },

    /// Aggregate dated counts into a gap-filled trend series
    Trend {
        #[arg(short, long, help = "Input CSV file with date,count rows")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "daily, weekly, monthly or yearly [default: from settings]"
        )]
        granularity: Option<Granularity>,

        #[arg(long, help = "Range start (YYYY-MM-DD)")]
        start: Option<NaiveDate>,

        #[arg(long, help = "Range end (YYYY-MM-DD)")]
        end: Option<NaiveDate>,

        #[arg(long, default_value = "false")]
        no_headers: bool,
    },

    /// Build a venue or event breakdown series from label,count rows
    Breakdown {
        #[arg(short, long, help = "Input CSV file with label,count rows")]
        input: PathBuf,

        #[arg(short, long, help = "venue or event")]
        kind: BreakdownKind,
    },

    /// Summarise irrigation scheme records for the analytics dashboard
    Analytics {
        #[arg(short, long, help = "Input CSV file of scheme records")]
        input: PathBuf,

        #[arg(long, default_value = "false", help = "Fail on invalid scheme rows")]
        strict: bool,
    },
}
