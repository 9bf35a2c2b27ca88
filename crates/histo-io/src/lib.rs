//! histo-io - Numeric column input for histo
//!
//! Pulls a single column out of a tabular file and reduces it to the
//! finite numbers the statistics core works on:
//!
//! - **CSV/TSV**: header or headerless, with per-column type inference
//! - **Filtering**: empty, non-numeric, NaN and infinite cells are dropped
//!
//! # Design
//!
//! Readers implement the `DataReader` trait so further formats can slot in
//! behind `open_file`.

pub mod numeric;
pub mod reader;
pub mod schema;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use numeric::*;
pub use reader::*;
pub use schema::*;
