// Commands are grouped by the record they act on (humidor, cigar, journal)
// plus the read-only views over the whole collection (dashboard, browse).

mod commands;
mod common;
pub mod hints;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "humidor")]
#[command(about = "Track humidors, cigars and a tasting journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $HUMIDOR_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
