mod menu;
mod metrics;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parking_core::{build_attendant, load_config, validate_config, ConfigError};

use menu::{prompt_config, Menu};

/// Default config file, overridable with `PARKING_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "parking.toml";

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr so they don't interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config_path = std::env::var("PARKING_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let config = match load_config(&config_path) {
        Ok(config) => {
            info!("Loaded configuration from {:?}", config_path);
            config
        }
        Err(ConfigError::FileNotFound(_)) => {
            info!(
                "No configuration at {:?}, falling back to interactive setup",
                config_path
            );
            writeln!(output, "Welcome to Parking Lot System")?;
            writeln!(output, "-----------------------------")?;
            prompt_config(&mut input, &mut output)?
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load config from {:?}", config_path))
        }
    };

    validate_config(&config).context("Configuration validation failed")?;

    let attendant = build_attendant(&config);
    let mut menu = Menu::new(input, output, attendant);
    menu.run().context("Menu I/O failed")?;

    let still_parked: usize = menu
        .attendant()
        .parking_lots()
        .iter()
        .map(|lot| lot.occupied())
        .sum();
    info!(still_parked, "Parking lot system stopped");
    match metrics::encode_metrics() {
        Ok(text) => debug!("Final metrics:\n{}", text),
        Err(e) => warn!("Failed to encode metrics: {:#}", e),
    }
    Ok(())
}
