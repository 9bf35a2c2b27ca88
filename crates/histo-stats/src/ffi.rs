//! UniFFI exports for the Swift chart front end
//!
//! Thin owned-argument wrappers over the core functions; only compiled with
//! the `uniffi` feature.

use crate::binning::{self, Bin, BinConfig};
use crate::config::HistogramConfig;
use crate::overlay::{self, CurvePoint};
use crate::summary::StatisticsSummary;

/// Summary statistics, `None` for empty data
#[uniffi::export]
pub fn compute_statistics(data: Vec<f64>) -> Option<StatisticsSummary> {
    StatisticsSummary::from_data(&data)
}

/// Histogram bins for the data
#[uniffi::export]
pub fn generate_bins(data: Vec<f64>, config: BinConfig) -> Vec<Bin> {
    binning::generate_bins(&data, &config)
}

/// Bins resolved from raw settings strings
#[uniffi::export]
pub fn generate_bins_from_settings(data: Vec<f64>, settings: HistogramConfig) -> Vec<Bin> {
    binning::generate_bins(&data, &settings.bin_config())
}

/// Normal overlay curve
#[uniffi::export]
pub fn generate_normal_curve(
    stats: StatisticsSummary,
    bins: Vec<Bin>,
    intervals: u32,
) -> Vec<CurvePoint> {
    overlay::generate_normal_curve(&stats, &bins, intervals as usize)
}

/// Suggested bin count for a named heuristic
#[uniffi::export]
pub fn calculate_bin_count(data: Vec<f64>, method: String) -> u32 {
    binning::calculate_bin_count(&data, &method) as u32
}
