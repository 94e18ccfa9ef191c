use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration, raised before any colony state exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite, positive number (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("snack_max_value must be at least 1")]
    EmptySnacks,
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contract violations while driving a running colony.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("time step must be finite and non-negative (got {0})")]
    InvalidTimeStep(f32),
}
