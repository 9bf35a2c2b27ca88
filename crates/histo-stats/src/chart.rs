//! Chart value selection and axis geometry
//!
//! Everything here is plain numbers: which bin field a bar shows, the
//! extent of the axes, and where the mean/median/spread markers go. Drawing
//! them is left to the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::binning::Bin;
use crate::summary::StatisticsSummary;

/// Headroom multiplier applied to the tallest bar
const Y_HEADROOM: f64 = 1.1;

/// What the bar height represents
///
/// Serialized as its display label. Deserializing accepts any label
/// `from_label_lenient` does, so an unknown chart type in a settings file
/// loads as `Frequency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ChartType {
    #[default]
    Frequency,
    RelativeFrequency,
    Cumulative,
    CumulativePercent,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Frequency => "Frequency",
            ChartType::RelativeFrequency => "Relative Frequency (%)",
            ChartType::Cumulative => "Cumulative",
            ChartType::CumulativePercent => "Cumulative (%)",
        }
    }

    /// Y axis title used when the caller supplies none
    pub fn default_axis_label(&self) -> &'static str {
        match self {
            ChartType::Frequency => "Frequency",
            ChartType::RelativeFrequency => "Relative Frequency (%)",
            ChartType::Cumulative => "Cumulative Count",
            ChartType::CumulativePercent => "Cumulative Frequency (%)",
        }
    }

    /// Bar height for a bin
    pub fn bar_value(&self, bin: &Bin) -> f64 {
        match self {
            ChartType::Frequency => bin.count as f64,
            ChartType::RelativeFrequency => bin.relative_frequency,
            ChartType::Cumulative => bin.cumulative_count as f64,
            ChartType::CumulativePercent => bin.cumulative_frequency,
        }
    }

    /// Whether the normal overlay can share this chart's y axis
    pub fn supports_normal_curve(&self) -> bool {
        matches!(self, ChartType::Frequency)
    }

    /// Parse a label, treating anything unknown as `Frequency`
    pub fn from_label_lenient(label: &str) -> Self {
        label.parse().unwrap_or_else(|err| {
            warn!("{}, using {}", err, ChartType::Frequency);
            ChartType::Frequency
        })
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frequency" => Ok(ChartType::Frequency),
            "relative frequency (%)"
            | "relative frequency"
            | "relativefrequency"
            | "relative" => Ok(ChartType::RelativeFrequency),
            "cumulative" => Ok(ChartType::Cumulative),
            "cumulative (%)" | "cumulative percent" | "cumulativepercent" => {
                Ok(ChartType::CumulativePercent)
            }
            other => Err(format!("Unknown chart type: {}", other)),
        }
    }
}

impl Serialize for ChartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ChartType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ChartType::from_label_lenient(&label))
    }
}

/// Axis extents for a set of bins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartGeometry {
    /// Left edge of the first bin
    pub x_min: f64,
    /// Right edge of the last bin
    pub x_max: f64,
    /// Tallest bar for the chart type
    pub max_value: f64,
    /// Upper end of the y axis, with headroom above the tallest bar
    pub y_max: f64,
}

impl ChartGeometry {
    /// Compute axis extents, `None` when there are no bins
    pub fn from_bins(bins: &[Bin], chart_type: ChartType) -> Option<Self> {
        let first = bins.first()?;
        let last = bins.last()?;
        let max_value = bins
            .iter()
            .map(|bin| chart_type.bar_value(bin))
            .fold(0.0, f64::max);

        Some(Self {
            x_min: first.x0,
            x_max: last.x1,
            max_value,
            y_max: max_value * Y_HEADROOM,
        })
    }

    /// Whether `x` lies inside the x extent
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    /// Position markers for the summary statistics
    pub fn markers(&self, stats: &StatisticsSummary) -> ReferenceMarkers {
        ReferenceMarkers {
            mean: Some(stats.mean).filter(|&m| self.contains_x(m)),
            median: Some(stats.median).filter(|&m| self.contains_x(m)),
            std_dev_band: (
                (stats.mean - stats.std_dev).max(self.x_min),
                (stats.mean + stats.std_dev).min(self.x_max),
            ),
        }
    }
}

/// Reference lines and the ±1 standard deviation band, clipped to the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMarkers {
    /// Mean line, absent if outside the bins
    pub mean: Option<f64>,
    /// Median line, absent if outside the bins
    pub median: Option<f64>,
    pub std_dev_band: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::{generate_bins, BinConfig};

    fn sample_bins() -> Vec<Bin> {
        generate_bins(&[0.0, 10.0, 20.0, 30.0, 40.0], &BinConfig::fixed_count(4))
    }

    #[test]
    fn test_bar_values() {
        let bins = sample_bins();
        let last = &bins[3];
        assert_eq!(ChartType::Frequency.bar_value(last), 2.0);
        assert!((ChartType::RelativeFrequency.bar_value(last) - 40.0).abs() < 1e-10);
        assert_eq!(ChartType::Cumulative.bar_value(last), 5.0);
        assert!((ChartType::CumulativePercent.bar_value(last) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_geometry() {
        let bins = sample_bins();
        let geometry = ChartGeometry::from_bins(&bins, ChartType::Cumulative).unwrap();
        assert_eq!(geometry.x_min, 0.0);
        assert_eq!(geometry.x_max, 40.0);
        assert_eq!(geometry.max_value, 5.0);
        assert!((geometry.y_max - 5.5).abs() < 1e-10);
        assert!(ChartGeometry::from_bins(&[], ChartType::Frequency).is_none());
    }

    #[test]
    fn test_markers_clipped() {
        let bins = sample_bins();
        let geometry = ChartGeometry::from_bins(&bins, ChartType::Frequency).unwrap();
        let stats = StatisticsSummary::from_data(&[0.0, 10.0, 20.0, 30.0, 40.0]).unwrap();
        let markers = geometry.markers(&stats);

        assert_eq!(markers.mean, Some(20.0));
        assert_eq!(markers.median, Some(20.0));
        // sd = sqrt(200) ~ 14.1, band stays inside [0, 40]
        let (lo, hi) = markers.std_dev_band;
        assert!(lo > 0.0 && hi < 40.0);

        let wide = StatisticsSummary {
            mean: 100.0,
            std_dev: 500.0,
            ..stats
        };
        let markers = geometry.markers(&wide);
        assert_eq!(markers.mean, None);
        assert_eq!(markers.std_dev_band, (0.0, 40.0));
    }

    #[test]
    fn test_chart_type_labels() {
        for chart_type in [
            ChartType::Frequency,
            ChartType::RelativeFrequency,
            ChartType::Cumulative,
            ChartType::CumulativePercent,
        ] {
            assert_eq!(chart_type.label().parse::<ChartType>(), Ok(chart_type));
        }
        assert_eq!(ChartType::from_label_lenient("pie"), ChartType::Frequency);
        assert_eq!(ChartType::Cumulative.default_axis_label(), "Cumulative Count");
        assert!(ChartType::Frequency.supports_normal_curve());
        assert!(!ChartType::Cumulative.supports_normal_curve());
    }

    #[test]
    fn test_chart_type_serde_uses_labels() {
        let json = serde_json::to_string(&ChartType::RelativeFrequency).unwrap();
        assert_eq!(json, "\"Relative Frequency (%)\"");

        let parsed: ChartType = serde_json::from_str("\"Cumulative (%)\"").unwrap();
        assert_eq!(parsed, ChartType::CumulativePercent);
        let parsed: ChartType = serde_json::from_str("\"CumulativePercent\"").unwrap();
        assert_eq!(parsed, ChartType::CumulativePercent);
        let parsed: ChartType = serde_json::from_str("\"pie\"").unwrap();
        assert_eq!(parsed, ChartType::Frequency);
    }
}
