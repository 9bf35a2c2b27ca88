//! Numeric filtering of raw cells
//!
//! The statistics core expects a column of finite numbers. Cells that are
//! empty, non-numeric, NaN or infinite are dropped here.

/// Parse a cell as a finite number
pub fn parse_finite(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Keep the cells that parse as finite numbers, in their original order
pub fn extract_numeric<S: AsRef<str>>(cells: &[S]) -> Vec<f64> {
    cells
        .iter()
        .filter_map(|cell| parse_finite(cell.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite(" 42 "), Some(42.0));
        assert_eq!(parse_finite("-1e3"), Some(-1000.0));
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("twelve"), None);
    }

    #[test]
    fn test_extract_numeric_keeps_order() {
        let cells = ["3", "x", "1", "", "2"];
        assert_eq!(extract_numeric(&cells), vec![3.0, 1.0, 2.0]);
    }
}
