//! Capsize demo binary.
//!
//! Builds one canoe with its passengers, crashes it, and prints who died
//! and what is left of the canoe.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `capsize.yaml` (or `$CAPSIZE_CONFIG`), falling
//!    back to the built-in demo scenario when no file exists
//! 2. Apply `CAPSIZE_SEED` / `CAPSIZE_CRASHES` overrides
//! 3. Initialize structured logging (tracing)
//! 4. Run the scenario and print the results

mod error;
mod output;
mod run;

use std::path::PathBuf;

use capsize_core::SimulationConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::RunnerError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "capsize.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_PATH_ENV: &str = "CAPSIZE_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or output cannot be rendered.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        seed = ?config.scenario.seed,
        crashes = config.scenario.crashes,
        passengers = config.scenario.passengers.len(),
        output = ?config.output,
        "Configuration loaded"
    );

    let outcome = run::run(&config)?;
    print!("{}", output::render(&outcome, config.output)?);

    info!(deaths = outcome.total_deaths(), "Run finished");
    Ok(())
}

/// Load the config file if one exists, then apply environment overrides.
fn load_config() -> Result<SimulationConfig, RunnerError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let mut config = match explicit {
        Some(path) => SimulationConfig::from_file(&path)?,
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if path.exists() {
                SimulationConfig::from_file(&path)?
            } else {
                SimulationConfig::default()
            }
        }
    };
    config.scenario.apply_env_overrides()?;
    Ok(config)
}
