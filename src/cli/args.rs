use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-api")]
#[command(about = "Read-only JSON API over a static climate observation dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Only log warnings and errors")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Configuration file path [default: ./climate-api.*]")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the JSON API
    Serve {
        #[arg(long, help = "Address to bind [default: 127.0.0.1]")]
        host: Option<String>,

        #[arg(short, long, help = "Port to bind [default: 5000]")]
        port: Option<u16>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Load the dataset and print an overview
    Inspect {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    #[arg(short, long, help = "Measurements CSV file")]
    pub measurements: Option<PathBuf>,

    #[arg(short, long, help = "Stations CSV file")]
    pub stations: Option<PathBuf>,
}

impl Cli {
    /// Log level implied by the global flags, if any
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}
