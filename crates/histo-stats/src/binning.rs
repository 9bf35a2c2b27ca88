//! Histogram binning
//!
//! Partitions a dataset into contiguous, equal-width bins. The bin count
//! comes from one of three sources, in priority order:
//!
//! 1. A fixed count (`BinMethod::FixedCount` with a positive count)
//! 2. A fixed width (`BinMethod::FixedWidth` with a positive width)
//! 3. A bin-count heuristic (Sturges, Scott, Freedman-Diaconis)
//!
//! Bins are half-open `[x0, x1)` except the last, which also admits the
//! dataset maximum. A dataset with zero range always yields a single bin
//! of width 1.
//!
//! A layout never has more than [`MAX_BIN_COUNT`] bins. A fixed count or
//! width that would exceed it, or a heuristic that suggests more (a tiny
//! IQR against a huge range), falls back to Sturges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::summary::StatisticsSummary;

/// User-facing binning method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum BinMethod {
    /// Sturges' formula
    #[default]
    Sturges,
    /// Scott's normal reference rule
    Scott,
    /// Freedman-Diaconis rule
    FreedmanDiaconis,
    /// Caller-supplied bin count
    FixedCount,
    /// Caller-supplied bin width
    FixedWidth,
}

impl BinMethod {
    /// All methods offered by the method selector
    pub const ALL: [BinMethod; 5] = [
        BinMethod::Sturges,
        BinMethod::Scott,
        BinMethod::FreedmanDiaconis,
        BinMethod::FixedCount,
        BinMethod::FixedWidth,
    ];

    /// Label shown in the method selector
    pub fn label(&self) -> &'static str {
        match self {
            BinMethod::Sturges => "Auto (Sturges)",
            BinMethod::Scott => "Auto (Scott)",
            BinMethod::FreedmanDiaconis => "Auto (Freedman-Diaconis)",
            BinMethod::FixedCount => "Fixed Count",
            BinMethod::FixedWidth => "Fixed Width",
        }
    }

    /// Heuristic used when no fixed count or width applies
    ///
    /// The fixed methods fall back to Sturges when their value is missing.
    pub fn count_rule(&self) -> BinCountRule {
        match self {
            BinMethod::Scott => BinCountRule::Scott,
            BinMethod::FreedmanDiaconis => BinCountRule::FreedmanDiaconis,
            BinMethod::Sturges | BinMethod::FixedCount | BinMethod::FixedWidth => {
                BinCountRule::Sturges
            }
        }
    }

    /// Parse a method label, falling back to Sturges for anything unknown
    pub fn from_label_lenient(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            debug!(label, "unrecognized bin method, using Sturges");
            BinMethod::Sturges
        })
    }
}

impl fmt::Display for BinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a bin method label that matches no method
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown bin method: {0}")]
pub struct UnknownBinMethod(pub String);

impl FromStr for BinMethod {
    type Err = UnknownBinMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sturges" | "auto (sturges)" => Ok(BinMethod::Sturges),
            "scott" | "auto (scott)" => Ok(BinMethod::Scott),
            "freedman-diaconis" | "auto (freedman-diaconis)" => Ok(BinMethod::FreedmanDiaconis),
            "fixed count" | "fixed-count" => Ok(BinMethod::FixedCount),
            "fixed width" | "fixed-width" => Ok(BinMethod::FixedWidth),
            _ => Err(UnknownBinMethod(s.to_string())),
        }
    }
}

/// Bin-count heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BinCountRule {
    /// `ceil(log2(n) + 1)`
    #[default]
    Sturges,
    /// `ceil(range / (3.5 * sd / n^(1/3)))`, 1 when sd is 0
    Scott,
    /// `ceil(range / (2 * iqr / n^(1/3)))`, Sturges when iqr is 0
    FreedmanDiaconis,
    /// `ceil(sqrt(n))`
    SquareRoot,
    /// `ceil(2 * n^(1/3))`
    Rice,
}

impl BinCountRule {
    /// Look up a heuristic by name, case-insensitively
    ///
    /// Accepts the canonical names (`sturges`, `scott`,
    /// `freedman-diaconis`, `sqrt`, `rice`) and the `Auto (...)` selector
    /// labels. Anything else resolves to Sturges.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sturges" | "auto (sturges)" => BinCountRule::Sturges,
            "scott" | "auto (scott)" => BinCountRule::Scott,
            "freedman-diaconis" | "auto (freedman-diaconis)" => BinCountRule::FreedmanDiaconis,
            "sqrt" => BinCountRule::SquareRoot,
            "rice" => BinCountRule::Rice,
            _ => BinCountRule::Sturges,
        }
    }

    /// Number of bins suggested for a dataset with these statistics
    pub fn bin_count(&self, stats: &StatisticsSummary) -> usize {
        let n = stats.count as f64;
        let suggested = match self {
            BinCountRule::Sturges => sturges(n),
            BinCountRule::Scott => {
                if stats.std_dev == 0.0 {
                    return 1;
                }
                let width = 3.5 * stats.std_dev / n.cbrt();
                (stats.range / width).ceil()
            }
            BinCountRule::FreedmanDiaconis => {
                if stats.iqr == 0.0 {
                    sturges(n)
                } else {
                    let width = 2.0 * stats.iqr / n.cbrt();
                    (stats.range / width).ceil()
                }
            }
            BinCountRule::SquareRoot => n.sqrt().ceil(),
            BinCountRule::Rice => (2.0 * n.cbrt()).ceil(),
        };
        suggested as usize
    }
}

fn sturges(n: f64) -> f64 {
    (n.log2() + 1.0).ceil()
}

/// Suggested bin count for a dataset using a named heuristic
///
/// Returns 1 for empty data.
pub fn calculate_bin_count(data: &[f64], method: &str) -> usize {
    match StatisticsSummary::from_data(data) {
        Some(stats) => BinCountRule::from_name(method).bin_count(&stats),
        None => 1,
    }
}

/// Upper bound on the number of bins in a resolved layout
pub const MAX_BIN_COUNT: usize = 1_000_000;

/// Binning configuration for a single computation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct BinConfig {
    pub method: BinMethod,
    /// Used only with `BinMethod::FixedCount`
    pub fixed_count: Option<u32>,
    /// Used only with `BinMethod::FixedWidth`
    pub fixed_width: Option<f64>,
}

impl BinConfig {
    pub fn new(method: BinMethod) -> Self {
        Self {
            method,
            fixed_count: None,
            fixed_width: None,
        }
    }

    pub fn fixed_count(count: u32) -> Self {
        Self {
            method: BinMethod::FixedCount,
            fixed_count: Some(count),
            fixed_width: None,
        }
    }

    pub fn fixed_width(width: f64) -> Self {
        Self {
            method: BinMethod::FixedWidth,
            fixed_count: None,
            fixed_width: Some(width),
        }
    }
}

/// Resolved bin geometry: `count` bins of `width` starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinLayout {
    pub start: f64,
    pub width: f64,
    pub count: usize,
}

impl BinLayout {
    /// Resolve the bin count and width for a dataset
    pub fn resolve(stats: &StatisticsSummary, config: &BinConfig) -> Self {
        let fixed_count = config.fixed_count.filter(|&c| c > 0);
        let fixed_width = config.fixed_width.filter(|w| w.is_finite() && *w > 0.0);

        let (count, width) = match (config.method, fixed_count, fixed_width) {
            (BinMethod::FixedCount, Some(count), _) if within_limit(count as f64) => {
                let count = count as usize;
                (count, stats.range / count as f64)
            }
            (BinMethod::FixedWidth, _, Some(width)) if within_limit(stats.range / width) => {
                ((stats.range / width).ceil() as usize, width)
            }
            (method, _, _) => {
                let count = match method.count_rule().bin_count(stats) {
                    count if count <= MAX_BIN_COUNT => count,
                    count => {
                        warn!(
                            method = %method,
                            count,
                            "heuristic bin count too large, using Sturges"
                        );
                        BinCountRule::Sturges.bin_count(stats)
                    }
                };
                (count, stats.range / count.max(1) as f64)
            }
        };

        let layout = if stats.range == 0.0 {
            Self {
                start: stats.min,
                width: 1.0,
                count: 1,
            }
        } else {
            Self {
                start: stats.min,
                width,
                count: count.max(1),
            }
        };

        debug!(
            method = %config.method,
            count = layout.count,
            width = layout.width,
            "resolved bin layout"
        );
        layout
    }

    /// Lower edge of bin `i`
    pub fn edge(&self, i: usize) -> f64 {
        self.start + i as f64 * self.width
    }

    /// Upper edge of the last bin
    pub fn end(&self) -> f64 {
        self.edge(self.count)
    }

    /// Index of the bin a value falls into
    ///
    /// Values below the start clamp to the first bin, values at or past the
    /// last edge clamp to the last bin.
    pub fn index_of(&self, value: f64) -> usize {
        // Negative and NaN quotients saturate to 0 in the cast
        let index = ((value - self.start) / self.width).floor() as usize;
        index.min(self.count - 1)
    }
}

/// Whether a fixed count or width yields a usable number of bins, warning
/// when it does not
fn within_limit(bins: f64) -> bool {
    let ok = bins.is_finite() && bins.ceil() <= MAX_BIN_COUNT as f64;
    if !ok {
        warn!(bins, "fixed bin setting exceeds {} bins, using Sturges", MAX_BIN_COUNT);
    }
    ok
}

/// A histogram bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Bin {
    /// Lower edge (inclusive)
    pub x0: f64,
    /// Upper edge (exclusive, except for the last bin)
    pub x1: f64,
    /// Number of values in the bin
    pub count: u64,
    /// The values assigned to this bin, in input order
    pub values: Vec<f64>,
    /// Same as `count`
    pub frequency: u64,
    /// Percentage of all values in this bin
    pub relative_frequency: f64,
    /// Running total of counts through this bin
    pub cumulative_count: u64,
    /// Running total as a percentage of all values
    pub cumulative_frequency: f64,
}

impl Bin {
    fn empty(x0: f64, x1: f64) -> Self {
        Self {
            x0,
            x1,
            count: 0,
            values: Vec::new(),
            frequency: 0,
            relative_frequency: 0.0,
            cumulative_count: 0,
            cumulative_frequency: 0.0,
        }
    }

    /// Center of the bin
    pub fn midpoint(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Bin width
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Check whether a value lies in the bin's half-open interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.x0 && value < self.x1
    }
}

/// Generate histogram bins from data
///
/// Returns an empty vector for empty data. Output is deterministic for a
/// given `(data, config)` pair.
pub fn generate_bins(data: &[f64], config: &BinConfig) -> Vec<Bin> {
    let Some(stats) = StatisticsSummary::from_data(data) else {
        return Vec::new();
    };
    generate_bins_with_stats(data, &stats, config)
}

/// Generate bins reusing statistics already computed for `data`
pub fn generate_bins_with_stats(
    data: &[f64],
    stats: &StatisticsSummary,
    config: &BinConfig,
) -> Vec<Bin> {
    if data.is_empty() {
        return Vec::new();
    }

    let layout = BinLayout::resolve(stats, config);
    trace!(values = data.len(), bins = layout.count, "assigning values to bins");

    let mut bins: Vec<Bin> = (0..layout.count)
        .map(|i| Bin::empty(layout.edge(i), layout.edge(i + 1)))
        .collect();

    for &value in data {
        let bin = &mut bins[layout.index_of(value)];
        bin.count += 1;
        bin.values.push(value);
    }

    let total = data.len() as f64;
    let mut cumulative = 0;
    for bin in &mut bins {
        bin.frequency = bin.count;
        bin.relative_frequency = bin.count as f64 / total * 100.0;
        cumulative += bin.count;
        bin.cumulative_count = cumulative;
        bin.cumulative_frequency = cumulative as f64 / total * 100.0;
    }

    bins
}
