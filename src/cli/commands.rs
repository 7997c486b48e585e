use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands, DataArgs};
use crate::config::{Overrides, Settings};
use crate::server;
use crate::store::Dataset;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<()> {
    let log_level = cli.log_level();
    let config_file = cli.config.clone();

    match cli.command {
        Commands::Serve { host, port, data } => {
            let overrides = build_overrides(&data, host, port, log_level);
            let settings = Settings::load(config_file.as_deref(), &overrides)
                .context("Failed to load configuration")?;
            setup_logging(&settings.log.level);

            let dataset = load_dataset(&settings)?;
            server::serve(Arc::new(dataset), &settings.server.address())
                .await
                .context("Server failed")?;
        }

        Commands::Inspect { data } => {
            let overrides = build_overrides(&data, None, None, log_level);
            let settings = Settings::load(config_file.as_deref(), &overrides)
                .context("Failed to load configuration")?;
            setup_logging(&settings.log.level);

            let dataset = load_dataset(&settings)?;
            let overview = DatasetAnalyzer::new().analyze(&dataset.session());

            println!("Dataset: {}", settings.data.measurements.display());
            println!("{}", overview.summary());
            if !overview.integrity.unknown_station_ids.is_empty() {
                println!(
                    "Unknown stations: {}",
                    overview.integrity.unknown_station_ids.join(", ")
                );
            }
            if !overview.integrity.duplicate_station_ids.is_empty() {
                println!(
                    "Duplicate stations: {}",
                    overview.integrity.duplicate_station_ids.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn build_overrides(
    data: &DataArgs,
    host: Option<String>,
    port: Option<u16>,
    log_level: Option<&str>,
) -> Overrides {
    Overrides {
        host,
        port,
        measurements: data.measurements.clone(),
        stations: data.stations.clone(),
        log_level: log_level.map(str::to_string),
    }
}

fn load_dataset(settings: &Settings) -> Result<Dataset> {
    info!("Loading dataset");
    Dataset::load(&settings.data.measurements, &settings.data.stations).with_context(|| {
        format!(
            "Failed to load dataset from {} and {}",
            settings.data.measurements.display(),
            settings.data.stations.display()
        )
    })
}

/// Set up structured logging to stderr. `RUST_LOG` wins over the configured level.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_api={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
