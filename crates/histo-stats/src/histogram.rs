//! One-call histogram pipeline
//!
//! data → summary → bins → overlay curve, plus the axis geometry the
//! renderer needs. Each call recomputes from scratch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binning::{generate_bins_with_stats, Bin, BinConfig};
use crate::chart::{ChartGeometry, ChartType};
use crate::config::HistogramConfig;
use crate::overlay::{generate_normal_curve, CurvePoint};
use crate::summary::StatisticsSummary;

/// Everything needed to draw one histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub stats: StatisticsSummary,
    pub bins: Vec<Bin>,
    /// Normal overlay, empty unless requested and meaningful
    pub curve: Vec<CurvePoint>,
    pub chart_type: ChartType,
    pub geometry: ChartGeometry,
}

impl Histogram {
    /// Build a histogram from data and settings
    ///
    /// Returns `None` for empty data.
    pub fn build(data: &[f64], config: &HistogramConfig) -> Option<Self> {
        Self::build_with(
            data,
            &config.bin_config(),
            config.chart_type,
            config.show_normal_curve,
            config.curve_intervals as usize,
        )
    }

    /// Build from an already resolved `BinConfig`
    ///
    /// The overlay is only produced for `ChartType::Frequency`, the one
    /// chart whose y axis is a count.
    pub fn build_with(
        data: &[f64],
        bin_config: &BinConfig,
        chart_type: ChartType,
        show_normal_curve: bool,
        curve_intervals: usize,
    ) -> Option<Self> {
        let stats = StatisticsSummary::from_data(data)?;
        let bins = generate_bins_with_stats(data, &stats, bin_config);
        let geometry = ChartGeometry::from_bins(&bins, chart_type)?;

        let curve = if show_normal_curve && chart_type.supports_normal_curve() {
            generate_normal_curve(&stats, &bins, curve_intervals)
        } else {
            Vec::new()
        };

        debug!(
            count = stats.count,
            bins = bins.len(),
            curve_points = curve.len(),
            "built histogram"
        );

        Some(Self {
            stats,
            bins,
            curve,
            chart_type,
            geometry,
        })
    }

    /// Bar heights in bin order for the chart type
    pub fn bar_values(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| self.chart_type.bar_value(bin))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty() {
        assert!(Histogram::build(&[], &HistogramConfig::default()).is_none());
    }

    #[test]
    fn test_build_default() {
        let data = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
        let histogram = Histogram::build(&data, &HistogramConfig::default()).unwrap();

        assert_eq!(histogram.bins.len(), 5);
        assert!(histogram.curve.is_empty());
        assert_eq!(histogram.geometry.x_min, 1.0);
        assert_eq!(histogram.bar_values().iter().sum::<f64>(), 10.0);
    }

    #[test]
    fn test_curve_only_for_frequency() {
        let data = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
        let mut config = HistogramConfig {
            show_normal_curve: true,
            ..HistogramConfig::default()
        };
        let histogram = Histogram::build(&data, &config).unwrap();
        assert_eq!(histogram.curve.len(), 101);

        config.chart_type = ChartType::CumulativePercent;
        let histogram = Histogram::build(&data, &config).unwrap();
        assert!(histogram.curve.is_empty());
        assert!((histogram.geometry.max_value - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_build_uses_fixed_count_setting() {
        let config = HistogramConfig {
            bin_method: "Fixed Count".to_string(),
            bin_count: "4".to_string(),
            ..HistogramConfig::default()
        };
        let histogram = Histogram::build(&[0.0, 10.0, 20.0, 30.0, 40.0], &config).unwrap();
        assert_eq!(histogram.bins.len(), 4);
        assert_eq!(histogram.geometry.x_max, 40.0);
    }
}
