//! histo - histogram summaries from the command line
//!
//! Reads one numeric column from a CSV/TSV file and prints its summary
//! statistics, bins and optional normal overlay.

mod args;
mod error;
mod report;

use clap::Parser;
use histo_io::{csv_reader::CsvReader, DataReader};
use histo_stats::Histogram;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Args, OutputFormat};
use error::CliError;
use report::{Report, Source};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let output = run(&args)?;
    println!("{}", output);
    Ok(())
}

fn run(args: &Args) -> Result<String, CliError> {
    let settings = args.settings()?;

    let path = args
        .input
        .to_str()
        .ok_or_else(|| CliError::InvalidPath(args.input.clone()))?;
    let reader = CsvReader::open_with_options(path, args.delimiter_byte()?, !args.no_header)?;

    let column = match &args.column {
        Some(name) => name.clone(),
        None => reader
            .read_schema()?
            .first_numeric_column()
            .map(|c| c.name.clone())
            .ok_or_else(|| CliError::NoNumericColumn(args.input.clone()))?,
    };
    debug!(%column, "summarizing column");

    let values = reader.read_numeric_column(&column)?;
    let histogram = Histogram::build(&values, &settings)
        .ok_or_else(|| histo_io::IoError::NoNumericValues(column.clone()))?;

    let report = Report {
        column: &column,
        source: Source::of(&reader),
        histogram: &histogram,
    };
    match args.format {
        OutputFormat::Table => Ok(report::render_table(&report)),
        OutputFormat::Json => Ok(report::render_json(&report)?),
    }
}
