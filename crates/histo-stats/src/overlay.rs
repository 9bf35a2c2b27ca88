//! Normal distribution overlay
//!
//! Samples a normal density fitted to the dataset's mean and standard
//! deviation, scaled by the histogram's total area so the curve shares the
//! bars' count axis.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::binning::Bin;
use crate::summary::StatisticsSummary;

/// Default number of sampling intervals (101 points)
pub const DEFAULT_CURVE_INTERVALS: usize = 100;

/// Fraction of the data range added on each side of the curve
const CURVE_PADDING: f64 = 0.05;

/// A point on the overlay curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Normal probability density at `x`, 0 when `std_dev` is 0
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    let coefficient = 1.0 / (std_dev * (2.0 * PI).sqrt());
    let exponent = -(x - mean).powi(2) / (2.0 * std_dev.powi(2));
    coefficient * exponent.exp()
}

/// Sum of `count * width` over all bins
pub fn histogram_area(bins: &[Bin]) -> f64 {
    bins.iter().map(|bin| bin.count as f64 * bin.width()).sum()
}

/// Sample the scaled normal curve over `[min - pad, max + pad]`
///
/// Produces `intervals + 1` points in ascending `x`, where `pad` is 5% of
/// the data range. Returns an empty vector when there are no bins or the
/// dataset has no spread. An `intervals` of 0 is treated as 1.
pub fn generate_normal_curve(
    stats: &StatisticsSummary,
    bins: &[Bin],
    intervals: usize,
) -> Vec<CurvePoint> {
    if bins.is_empty() || stats.std_dev == 0.0 {
        return Vec::new();
    }

    let intervals = intervals.max(1);
    let padding = (stats.max - stats.min) * CURVE_PADDING;
    let start = stats.min - padding;
    let end = stats.max + padding;
    let step = (end - start) / intervals as f64;
    let area = histogram_area(bins);

    (0..=intervals)
        .map(|i| {
            let x = start + i as f64 * step;
            CurvePoint {
                x,
                y: normal_pdf(x, stats.mean, stats.std_dev) * area,
            }
        })
        .collect()
}
