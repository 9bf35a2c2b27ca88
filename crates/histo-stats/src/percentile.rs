//! Sorting and percentile helpers shared by the summary and binning code

use std::cmp::Ordering;

/// Return an ascending copy of the data using numeric ordering.
///
/// Input is expected to be finite; any stray NaN compares equal so the
/// sort still terminates.
pub fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Linear-interpolation percentile of already sorted data.
///
/// `p` is in percent (0-100). The fractional position
/// `p / 100 * (n - 1)` is interpolated between its floor and ceiling
/// neighbours; equal neighbours yield that value exactly. Positions below
/// the first element clamp to it, positions at or beyond the last element
/// clamp to the last. Returns `None` for empty input.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let index = (p / 100.0) * (n - 1) as f64;
    if index <= 0.0 {
        return Some(sorted[0]);
    }

    if index >= (n - 1) as f64 {
        return Some(sorted[n - 1]);
    }

    let lower = index.floor();
    let weight = index - lower;
    let (lo, hi) = (lower as usize, index.ceil() as usize);
    Some(lerp(sorted[lo], sorted[hi], weight))
}

/// Median of already sorted data: middle element, or the mean of the two
/// middle elements for even counts.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        Some(lerp(sorted[mid - 1], sorted[mid], 0.5))
    } else {
        Some(sorted[mid])
    }
}

/// Interpolate between `lo <= hi` at `weight` in `[0, 1]`, staying inside
/// `[lo, hi]`.
///
/// The difference form keeps neighbouring percentiles ordered. When
/// `hi - lo` overflows (operands of opposite sign near `f64::MAX`) the
/// weighted-sum form is used instead.
fn lerp(lo: f64, hi: f64, weight: f64) -> f64 {
    let span = hi - lo;
    let value = if span.is_finite() {
        lo + span * weight
    } else {
        lo * (1.0 - weight) + hi * weight
    };
    value.max(lo).min(hi)
}
