//! Error types for histo-stats
//!
//! The statistics and binning computations never fail; absence of data is
//! `None` or an empty vector. Errors only arise when loading or validating
//! settings.

use thiserror::Error;

/// Errors raised by the settings layer
#[derive(Error, Debug)]
pub enum HistogramError {
    /// A setting is present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A TOML settings document failed to parse
    #[error("Failed to parse TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// Settings could not be written as TOML
    #[error("Failed to serialize TOML settings: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A JSON settings document failed to parse or serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for settings operations
pub type HistogramResult<T> = Result<T, HistogramError>;
