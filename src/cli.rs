use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for unroll-bench
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Times naive vs. manually unrolled array summation and prints the assembly emitted for each"
)]
pub struct Cli {
    /// Path to a pre-generated assembly/disassembly listing
    #[arg(required = true)]
    pub listing: PathBuf,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colorized text
    Text,
    /// JSON format for machine consumption
    Json,
}
