//! Histogram settings
//!
//! The settings arrive from a configuration surface as loosely typed
//! strings. `HistogramConfig::bin_config` turns them into an immutable
//! `BinConfig`, resolving anything malformed to a documented default rather
//! than failing.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::binning::{BinConfig, BinMethod};
use crate::chart::ChartType;
use crate::error::{HistogramError, HistogramResult};
use crate::overlay::DEFAULT_CURVE_INTERVALS;

/// Fixed bin count used when the supplied count cannot be parsed
pub const DEFAULT_FIXED_BIN_COUNT: u32 = 10;

/// Settings that affect how a histogram is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct HistogramConfig {
    /// Method label, e.g. "Auto (Sturges)" or "Fixed Width"
    pub bin_method: String,
    /// Bin count for "Fixed Count"
    pub bin_count: String,
    /// Bin width for "Fixed Width"
    pub bin_width: String,
    pub chart_type: ChartType,
    pub show_normal_curve: bool,
    /// Sampling intervals for the normal overlay
    pub curve_intervals: u32,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_method: BinMethod::Sturges.label().to_string(),
            bin_count: DEFAULT_FIXED_BIN_COUNT.to_string(),
            bin_width: String::new(),
            chart_type: ChartType::Frequency,
            show_normal_curve: false,
            curve_intervals: DEFAULT_CURVE_INTERVALS as u32,
        }
    }
}

impl HistogramConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> HistogramResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> HistogramResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> HistogramResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> HistogramResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the raw settings into a `BinConfig`
    ///
    /// - Unknown method labels resolve to Sturges.
    /// - With "Fixed Count", an empty, unparseable, or non-positive count
    ///   becomes 10.
    /// - With "Fixed Width", an empty, unparseable, or non-positive width
    ///   means "not supplied", which falls through to Sturges.
    pub fn bin_config(&self) -> BinConfig {
        let method = match self.bin_method.parse::<BinMethod>() {
            Ok(method) => method,
            Err(err) => {
                warn!("{}, using {}", err, BinMethod::Sturges);
                BinMethod::Sturges
            }
        };

        let mut config = BinConfig::new(method);
        match method {
            BinMethod::FixedCount => {
                config.fixed_count = Some(parse_count(&self.bin_count).unwrap_or_else(|| {
                    warn!(
                        bin_count = %self.bin_count,
                        "unusable bin count, using {}", DEFAULT_FIXED_BIN_COUNT
                    );
                    DEFAULT_FIXED_BIN_COUNT
                }));
            }
            BinMethod::FixedWidth if !self.bin_width.trim().is_empty() => {
                config.fixed_width = parse_width(&self.bin_width);
                if config.fixed_width.is_none() {
                    warn!(bin_width = %self.bin_width, "unusable bin width, using Sturges");
                }
            }
            _ => {}
        }
        config
    }

    /// Strict check of the settings
    ///
    /// `bin_config` never fails; this reports the values it would have had
    /// to replace.
    pub fn validate(&self) -> HistogramResult<()> {
        let method = self
            .bin_method
            .parse::<BinMethod>()
            .map_err(|e| HistogramError::InvalidConfig(e.to_string()))?;

        match method {
            BinMethod::FixedCount if parse_count(&self.bin_count).is_none() => {
                return Err(HistogramError::InvalidConfig(format!(
                    "bin_count must be a positive integer, got '{}'",
                    self.bin_count
                )));
            }
            BinMethod::FixedWidth if parse_width(&self.bin_width).is_none() => {
                return Err(HistogramError::InvalidConfig(format!(
                    "bin_width must be a positive number, got '{}'",
                    self.bin_width
                )));
            }
            _ => {}
        }

        if self.curve_intervals == 0 {
            return Err(HistogramError::InvalidConfig(
                "curve_intervals must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a positive integer bin count. A fractional number is truncated.
fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let count = match raw.parse::<i64>() {
        Ok(count) => count,
        Err(_) => {
            let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
            value.trunc() as i64
        }
    };
    u32::try_from(count).ok().filter(|&c| c > 0)
}

/// Parse a positive, finite bin width
fn parse_width(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_method(method: &str, count: &str, width: &str) -> HistogramConfig {
        HistogramConfig {
            bin_method: method.to_string(),
            bin_count: count.to_string(),
            bin_width: width.to_string(),
            ..HistogramConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = HistogramConfig::new();
        assert_eq!(config.bin_config(), BinConfig::new(BinMethod::Sturges));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fixed_count_parsing() {
        assert_eq!(
            with_method("Fixed Count", "12", "").bin_config(),
            BinConfig::fixed_count(12)
        );
        assert_eq!(
            with_method("Fixed Count", "abc", "").bin_config(),
            BinConfig::fixed_count(10)
        );
        assert_eq!(
            with_method("Fixed Count", "0", "").bin_config(),
            BinConfig::fixed_count(10)
        );
        assert_eq!(
            with_method("Fixed Count", "7.9", "").bin_config(),
            BinConfig::fixed_count(7)
        );
        assert_eq!(
            with_method("Fixed Count", "", "").bin_config(),
            BinConfig::fixed_count(10)
        );
        assert_eq!(
            with_method("Fixed Count", "  ", "").bin_config(),
            BinConfig::fixed_count(10)
        );
    }

    #[test]
    fn test_fixed_width_parsing() {
        assert_eq!(
            with_method("Fixed Width", "", "2.5").bin_config(),
            BinConfig::fixed_width(2.5)
        );
        assert_eq!(
            with_method("Fixed Width", "", "wide").bin_config(),
            BinConfig::new(BinMethod::FixedWidth)
        );
        assert_eq!(
            with_method("Fixed Width", "", "-1").bin_config(),
            BinConfig::new(BinMethod::FixedWidth)
        );
    }

    #[test]
    fn test_unknown_method_falls_back() {
        let config = with_method("Mystery", "5", "");
        assert_eq!(config.bin_config(), BinConfig::new(BinMethod::Sturges));
        assert!(matches!(
            config.validate(),
            Err(HistogramError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(with_method("Fixed Count", "x", "").validate().is_err());
        assert!(with_method("Fixed Width", "", "0").validate().is_err());
        let zero_intervals = HistogramConfig {
            curve_intervals: 0,
            ..HistogramConfig::default()
        };
        assert!(zero_intervals.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_with_defaults() {
        let config = HistogramConfig::from_toml(
            r#"
bin_method = "Auto (Scott)"
show_normal_curve = true
chart_type = "Cumulative"
"#,
        )
        .unwrap();
        assert_eq!(config.bin_config().method, BinMethod::Scott);
        assert!(config.show_normal_curve);
        assert_eq!(config.chart_type, ChartType::Cumulative);
        assert_eq!(config.curve_intervals, 100);

        let reparsed = HistogramConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_chart_type_labels_load() {
        let config = HistogramConfig::from_toml(r#"chart_type = "Cumulative (%)""#).unwrap();
        assert_eq!(config.chart_type, ChartType::CumulativePercent);

        let config =
            HistogramConfig::from_toml(r#"chart_type = "Relative Frequency (%)""#).unwrap();
        assert_eq!(config.chart_type, ChartType::RelativeFrequency);

        let config = HistogramConfig::from_toml(r#"chart_type = "pie""#).unwrap();
        assert_eq!(config.chart_type, ChartType::Frequency);

        let config = HistogramConfig::from_json(r#"{"chart_type": "pie"}"#).unwrap();
        assert_eq!(config.chart_type, ChartType::Frequency);
    }

    #[test]
    fn test_chart_type_saved_as_label() {
        let config = HistogramConfig {
            chart_type: ChartType::CumulativePercent,
            ..HistogramConfig::default()
        };
        let toml = config.to_toml().unwrap();
        assert!(toml.contains(r#"chart_type = "Cumulative (%)""#));
        assert_eq!(HistogramConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_json_parse_error() {
        assert!(matches!(
            HistogramConfig::from_json("{ not json"),
            Err(HistogramError::Json(_))
        ));
        let json = HistogramConfig::default().to_json().unwrap();
        assert_eq!(
            HistogramConfig::from_json(&json).unwrap(),
            HistogramConfig::default()
        );
    }
}
