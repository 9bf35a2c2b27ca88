//! Error types for the histo command

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] histo_io::IoError),

    #[error("Invalid settings: {0}")]
    Settings(#[from] histo_stats::HistogramError),

    #[error("Failed to read settings file {}: {}", .path.display(), .source)]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),

    #[error("No numeric column found in {}", .0.display())]
    NoNumericColumn(PathBuf),

    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
