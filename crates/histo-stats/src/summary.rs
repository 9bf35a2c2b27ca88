//! Summary statistics for a histogram dataset
//!
//! Provides the fixed-shape summary that labels a histogram:
//! - Mean, median, mode
//! - Population variance and standard deviation
//! - Min, max, range, quartiles and IQR
//! - Skewness and excess kurtosis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::percentile::{median, percentile, sorted_copy};

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct StatisticsSummary {
    /// Number of values
    pub count: u64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Most frequent value, earliest in input order on ties
    pub mode: f64,
    /// Population variance (divisor = count)
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// max - min
    pub range: f64,
    /// First quartile (25th percentile, linear interpolation)
    pub q1: f64,
    /// Third quartile (75th percentile, linear interpolation)
    pub q3: f64,
    /// Interquartile range (q3 - q1)
    pub iqr: f64,
    /// Population Fisher-Pearson skewness, 0 when std_dev is 0
    pub skewness: f64,
    /// Population excess kurtosis, 0 when std_dev is 0
    pub kurtosis: f64,
}

impl StatisticsSummary {
    /// Compute summary statistics from data
    ///
    /// Returns `None` for empty input. The input is assumed to be finite;
    /// filtering happens before it reaches this point.
    pub fn from_data(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let count = data.len();
        let n = count as f64;
        let mean = data.iter().sum::<f64>() / n;

        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let sorted = sorted_copy(data);
        let min = sorted[0];
        let max = sorted[count - 1];
        let median = median(&sorted)?;
        let q1 = percentile(&sorted, 25.0)?;
        let q3 = percentile(&sorted, 75.0)?;

        let (skewness, kurtosis) = if std_dev > 0.0 {
            let standardized = |power: i32| {
                data.iter()
                    .map(|x| ((x - mean) / std_dev).powi(power))
                    .sum::<f64>()
                    / n
            };
            (standardized(3), standardized(4) - 3.0)
        } else {
            (0.0, 0.0)
        };

        Some(Self {
            count: count as u64,
            mean,
            median,
            mode: mode(data)?,
            variance,
            std_dev,
            min,
            max,
            range: max - min,
            q1,
            q3,
            iqr: q3 - q1,
            skewness,
            kurtosis,
        })
    }

    /// Compute z-score for a value
    ///
    /// Returns 0 for a zero-spread dataset.
    pub fn zscore(&self, x: f64) -> f64 {
        if self.std_dev == 0.0 {
            return 0.0;
        }
        (x - self.mean) / self.std_dev
    }

    /// Check whether the dataset has no spread (all values identical)
    pub fn is_degenerate(&self) -> bool {
        self.range == 0.0
    }
}

/// Compute summary statistics, `None` for empty input
pub fn calculate_stats(data: &[f64]) -> Option<StatisticsSummary> {
    StatisticsSummary::from_data(data)
}

/// Most frequent value in a single left-to-right scan.
///
/// A value replaces the current mode only when its count strictly exceeds
/// the running maximum, so the first value to reach the top count wins.
fn mode(data: &[f64]) -> Option<f64> {
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    let mut max_freq = 0;
    let mut mode = None;

    for &value in data {
        // -0.0 and 0.0 count as the same value
        let key = if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() };
        let freq = frequency.entry(key).or_insert(0);
        *freq += 1;
        if *freq > max_freq {
            max_freq = *freq;
            mode = Some(value);
        }
    }

    mode
}
