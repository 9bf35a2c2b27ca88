//! Text and JSON output for a computed histogram

use std::fmt;

use histo_io::DataReader;
use histo_stats::Histogram;
use serde::Serialize;

/// Width of the longest bar in the text table
const BAR_WIDTH: usize = 40;

/// Where the summarized column came from
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Source<'a> {
    pub path: Option<&'a str>,
    pub format: &'static str,
}

impl<'a> Source<'a> {
    pub fn of(reader: &'a dyn DataReader) -> Self {
        Self {
            path: reader.path(),
            format: reader.format_name(),
        }
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path {
            Some(path) => write!(f, "{} ({})", path, self.format),
            None => f.write_str(self.format),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub column: &'a str,
    pub source: Source<'a>,
    #[serde(flatten)]
    pub histogram: &'a Histogram,
}

pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Statistics panel followed by one row per bin
pub fn render_table(report: &Report<'_>) -> String {
    report.to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let histogram = self.histogram;
        let stats = &histogram.stats;

        writeln!(f, "Distribution of {} in {}", self.column, self.source)?;
        writeln!(f, "  N         {}", stats.count)?;
        writeln!(f, "  Mean      {:.4}", stats.mean)?;
        writeln!(f, "  Median    {:.4}", stats.median)?;
        writeln!(f, "  Mode      {:.4}", stats.mode)?;
        writeln!(f, "  Std Dev   {:.4}", stats.std_dev)?;
        writeln!(f, "  Range     {:.4} – {:.4}", stats.min, stats.max)?;
        writeln!(f, "  Q1 / Q3   {:.4} / {:.4}", stats.q1, stats.q3)?;
        writeln!(f, "  Skewness  {:.4}", stats.skewness)?;
        writeln!(f, "  Kurtosis  {:.4}", stats.kurtosis)?;
        writeln!(f)?;
        writeln!(f, "{}", histogram.chart_type.default_axis_label())?;

        let max_value = histogram.geometry.max_value;
        let last = histogram.bins.len().saturating_sub(1);
        for (i, (bin, value)) in histogram
            .bins
            .iter()
            .zip(histogram.bar_values())
            .enumerate()
        {
            let length = if max_value > 0.0 {
                (value / max_value * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            // The last bin is closed and holds the maximum
            let close = if i == last { ']' } else { ')' };
            writeln!(
                f,
                "  [{:>12.4}, {:>12.4}{} {:>10.2} {}",
                bin.x0,
                bin.x1,
                close,
                value,
                "█".repeat(length)
            )?;
        }

        if !histogram.curve.is_empty() {
            let peak = histogram
                .curve
                .iter()
                .fold(0.0_f64, |acc, point| acc.max(point.y));
            writeln!(f)?;
            writeln!(
                f,
                "Normal overlay: {} points, peak {:.2}",
                histogram.curve.len(),
                peak
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use histo_stats::HistogramConfig;

    const SOURCE: Source<'static> = Source {
        path: Some("prices.csv"),
        format: "CSV",
    };

    fn sample() -> Histogram {
        let config = HistogramConfig {
            bin_method: "Fixed Count".to_string(),
            bin_count: "4".to_string(),
            show_normal_curve: true,
            ..HistogramConfig::default()
        };
        Histogram::build(&[0.0, 10.0, 20.0, 30.0, 40.0], &config).unwrap()
    }

    #[test]
    fn test_table_lists_every_bin() {
        let histogram = sample();
        let table = render_table(&Report {
            column: "price",
            source: SOURCE,
            histogram: &histogram,
        });
        assert!(table.starts_with("Distribution of price in prices.csv (CSV)"));
        assert_eq!(table.matches("  [").count(), 4);
        assert!(table.contains("Normal overlay: 101 points"));
    }

    #[test]
    fn test_table_closes_last_bin() {
        let histogram = sample();
        let table = render_table(&Report {
            column: "price",
            source: SOURCE,
            histogram: &histogram,
        });
        let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("  [")).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("10.0000)"));
        assert!(rows[2].contains("30.0000)"));
        assert!(rows[3].contains("40.0000]"));
        assert_eq!(table.matches(']').count(), 1);
    }

    #[test]
    fn test_source_without_path() {
        let source = Source {
            path: None,
            format: "CSV",
        };
        assert_eq!(source.to_string(), "CSV");
    }

    #[test]
    fn test_json_flattens_histogram() {
        let histogram = sample();
        let json = render_json(&Report {
            column: "price",
            source: SOURCE,
            histogram: &histogram,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["column"], "price");
        assert_eq!(value["source"]["format"], "CSV");
        assert_eq!(value["source"]["path"], "prices.csv");
        assert_eq!(value["bins"].as_array().unwrap().len(), 4);
        assert_eq!(value["stats"]["count"], 5);
        assert_eq!(value["bins"][3]["cumulativeCount"], 5);
    }
}
