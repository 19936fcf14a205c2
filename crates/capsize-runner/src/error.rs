//! Error types for the capsize binary.
//!
//! [`RunnerError`] wraps every failure mode of a run so that `main` can
//! propagate with `?`.

use capsize_core::{CanoeError, ConfigError};

/// Top-level error for the capsize binary.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading or an environment override failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The configured canoe or a passenger was invalid.
    #[error("scenario error: {source}")]
    Scenario {
        /// The underlying construction error.
        #[from]
        source: CanoeError,
    },

    /// JSON rendering of the results failed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
