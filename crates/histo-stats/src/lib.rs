//! histo-stats - Statistics and binning behind the histogram chart
//!
//! This crate turns a column of finite numbers into everything a histogram
//! renderer draws:
//!
//! - **Summary**: mean, median, mode, population variance/std dev,
//!   quartiles, IQR, skewness and excess kurtosis
//! - **Binning**: Sturges, Scott, Freedman-Diaconis, square-root and Rice
//!   bin counts, or a fixed count/width, with cumulative frequencies
//! - **Overlay**: a normal curve scaled to the histogram's area
//!
//! # Design
//!
//! All computations are pure functions of their arguments. Empty input
//! yields `None` or an empty vector, and zero-spread data has defined
//! fallbacks (one bin of width 1, skewness and kurtosis of 0, no curve)
//! instead of NaN.

pub mod binning;
pub mod chart;
pub mod config;
pub mod error;
pub mod histogram;
pub mod overlay;
pub mod percentile;
pub mod summary;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use binning::*;
pub use chart::*;
pub use config::*;
pub use error::*;
pub use histogram::*;
pub use overlay::*;
pub use summary::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
