//! Command-line arguments and settings resolution

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use histo_stats::{ChartType, HistogramConfig};
use tracing::{info, warn};

use crate::error::CliError;

/// Summarize a numeric column as a histogram
#[derive(Debug, Parser)]
#[command(name = "histo", version, about)]
pub struct Args {
    /// CSV or TSV file to read
    pub input: PathBuf,

    /// Column to summarize (defaults to the first numeric column)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Settings file (TOML, or JSON with a .json extension)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Binning method, e.g. "Auto (Scott)", "freedman-diaconis", "Fixed Count"
    #[arg(short, long)]
    pub method: Option<String>,

    /// Bin count for "Fixed Count"
    #[arg(long)]
    pub bins: Option<String>,

    /// Bin width for "Fixed Width"
    #[arg(long)]
    pub width: Option<String>,

    /// What bar heights represent
    #[arg(long)]
    pub chart_type: Option<String>,

    /// Include the normal overlay curve
    #[arg(long)]
    pub normal_curve: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Field delimiter (defaults to tab for .tsv, comma otherwise)
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Treat the first row as data
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Args {
    /// Settings from the config file, with command-line overrides applied
    ///
    /// Invalid values are reported but not fatal; the histogram falls back
    /// to its defaults for them.
    pub fn settings(&self) -> Result<HistogramConfig, CliError> {
        let mut settings = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| CliError::ReadSettings {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "loaded settings");
                if path.extension().is_some_and(|ext| ext == "json") {
                    HistogramConfig::from_json(&text)?
                } else {
                    HistogramConfig::from_toml(&text)?
                }
            }
            None => HistogramConfig::default(),
        };

        if let Some(method) = &self.method {
            settings.bin_method = method.clone();
        }
        if let Some(bins) = &self.bins {
            settings.bin_count = bins.clone();
        }
        if let Some(width) = &self.width {
            settings.bin_width = width.clone();
        }
        if let Some(chart_type) = &self.chart_type {
            settings.chart_type = ChartType::from_label_lenient(chart_type);
        }
        if self.normal_curve {
            settings.show_normal_curve = true;
        }

        if let Err(err) = settings.validate() {
            warn!("{}", err);
        }
        Ok(settings)
    }

    /// Delimiter byte for the input file
    pub fn delimiter_byte(&self) -> Result<u8, CliError> {
        match self.delimiter {
            Some(c) if c.is_ascii() => Ok(c as u8),
            Some(c) => Err(CliError::InvalidDelimiter(c)),
            None if self.input.extension().is_some_and(|ext| ext == "tsv") => Ok(b'\t'),
            None => Ok(b','),
        }
    }
}
