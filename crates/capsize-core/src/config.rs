//! Configuration loading and typed config structures for Capsize.
//!
//! The optional configuration file is `capsize.yaml`. Every section and
//! field has a default, so an empty file (or no file at all) reproduces
//! the stock demo: a wooden canoe carrying Isaac, Axel, and Micah that
//! crashes once.
//!
//! ```yaml
//! crash:
//!   damage_per_death: 0.25
//! scenario:
//!   canoe: { length: 5.0, width: 0.85, depth: 0.35, material: Wood }
//!   passengers:
//!     - { name: Isaac, weight: 250 }
//!   seed: 7
//!   crashes: 3
//! output: json
//! logging:
//!   level: debug
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canoe::Canoe;
use crate::error::{CanoeError, is_positive_finite};
use crate::material::Material;
use crate::person::Person;

/// Environment variable that overrides [`ScenarioConfig::seed`].
pub const SEED_ENV: &str = "CAPSIZE_SEED";

/// Environment variable that overrides [`ScenarioConfig::crashes`].
pub const CRASHES_ENV: &str = "CAPSIZE_CRASHES";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidOverride {
        /// The environment variable name.
        var: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The `crash` section holds a constant the simulation cannot use.
    #[error("invalid crash section: {source}")]
    Crash {
        /// The validation failure.
        #[from]
        source: CanoeError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Constants of the crash formula.
    #[serde(default)]
    pub crash: CrashConfig,

    /// The canoe, its passengers, and how many times it crashes.
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// How the runner reports results.
    #[serde(default)]
    pub output: OutputFormat,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any error
    /// of [`SimulationConfig::parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string. Blank input yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Crash`] if the `crash` section fails validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.crash.validate()?;
        Ok(config)
    }

    /// Build the configured canoe with every configured passenger aboard.
    ///
    /// # Errors
    ///
    /// Returns [`CanoeError`] if a dimension, the crash config, or a
    /// passenger weight is invalid.
    pub fn build_canoe(&self) -> Result<Canoe, CanoeError> {
        let spec = &self.scenario.canoe;
        let mut canoe = Canoe::new(spec.length, spec.width, spec.depth, spec.material.clone())?
            .with_config(self.crash.clone())?;
        for passenger in &self.scenario.passengers {
            canoe.embark(Person::new(passenger.name.clone(), passenger.weight)?);
        }
        Ok(canoe)
    }
}

/// Tunable constants of the crash formula.
///
/// ```text
/// threshold = floor(base_threshold + volume_factor * volume / (durability_factor * coeff))
/// ```
///
/// A death happens while a roll in `(0, roll_ceiling]` exceeds the threshold.
/// See [`CrashConfig::validate`] for the accepted ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrashConfig {
    /// Constant term of the threshold (default: 5.0).
    pub base_threshold: f64,

    /// Multiplier applied to hull volume (default: 2.0).
    pub volume_factor: f64,

    /// Multiplier applied to the effective durability coefficient (default: 0.5).
    pub durability_factor: f64,

    /// Upper bound of each crash roll (default: 20.0).
    pub roll_ceiling: f64,

    /// Damage added to the canoe per passenger death (default: 0.25).
    pub damage_per_death: f64,
}

impl Default for CrashConfig {
    fn default() -> Self {
        Self {
            base_threshold: 5.0,
            volume_factor: 2.0,
            durability_factor: 0.5,
            roll_ceiling: 20.0,
            damage_per_death: 0.25,
        }
    }
}

impl CrashConfig {
    /// Check that the constants keep damage monotone and quarter-stepped and
    /// keep the threshold well defined.
    ///
    /// `damage_per_death` must be positive, finite and a multiple of 0.25.
    /// `durability_factor` and `roll_ceiling` must be positive and finite.
    /// `base_threshold` and `volume_factor` must be finite.
    ///
    /// # Errors
    ///
    /// Returns [`CanoeError::InvalidCrashConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CanoeError> {
        let positive = [
            ("damage_per_death", self.damage_per_death),
            ("durability_factor", self.durability_factor),
            ("roll_ceiling", self.roll_ceiling),
        ];
        for (field, value) in positive {
            if !is_positive_finite(value) {
                return Err(CanoeError::InvalidCrashConfig { field, value });
            }
        }
        if (self.damage_per_death * 4.0).fract().abs() >= f64::EPSILON {
            return Err(CanoeError::InvalidCrashConfig {
                field: "damage_per_death",
                value: self.damage_per_death,
            });
        }
        let finite = [
            ("base_threshold", self.base_threshold),
            ("volume_factor", self.volume_factor),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CanoeError::InvalidCrashConfig { field, value });
            }
        }
        Ok(())
    }
}

/// The scenario the runner simulates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Canoe geometry and material.
    pub canoe: CanoeSpec,

    /// Passengers, embarked in this order.
    pub passengers: Vec<PassengerSpec>,

    /// RNG seed. `None` draws a seed from the operating system.
    pub seed: Option<u64>,

    /// Number of crash events to run (default: 1).
    pub crashes: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            canoe: CanoeSpec::default(),
            passengers: vec![
                PassengerSpec::new("Isaac", 250.0),
                PassengerSpec::new("Axel", 90.0),
                PassengerSpec::new("Micah", 170.0),
            ],
            seed: None,
            crashes: 1,
        }
    }
}

impl ScenarioConfig {
    /// Apply `CAPSIZE_SEED` and `CAPSIZE_CRASHES` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if a variable is set but unparseable.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides looked up through `lookup` (variable name to value).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if a value is unparseable.
    pub fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse().map_err(|_err: core::num::ParseIntError| {
                ConfigError::InvalidOverride {
                    var: SEED_ENV,
                    value: raw.clone(),
                }
            })?;
            self.seed = Some(seed);
        }
        if let Some(raw) = lookup(CRASHES_ENV) {
            let crashes = raw.trim().parse().map_err(|_err: core::num::ParseIntError| {
                ConfigError::InvalidOverride {
                    var: CRASHES_ENV,
                    value: raw.clone(),
                }
            })?;
            self.crashes = crashes;
        }
        Ok(())
    }
}

/// Canoe geometry and material as written in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanoeSpec {
    /// Length in meters (default: 5.0).
    pub length: f64,
    /// Width in meters (default: 0.85).
    pub width: f64,
    /// Depth in meters (default: 0.35).
    pub depth: f64,
    /// Hull material (default: Wood).
    pub material: Material,
}

impl Default for CanoeSpec {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 0.85,
            depth: 0.35,
            material: Material::Wood,
        }
    }
}

/// A passenger as written in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerSpec {
    /// Display name.
    pub name: String,
    /// Weight, typically pounds.
    pub weight: f64,
}

impl PassengerSpec {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// How the runner prints its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Death notices and the status block as plain text.
    #[default]
    Text,
    /// A single JSON document with every crash report and the final status.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset (default: `warn`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
        }
    }
}
