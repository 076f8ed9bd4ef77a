/// Rescale `values` so the largest becomes 100.
///
/// A zero or non-finite maximum yields all zeros.
pub fn normalize_to_percent(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max * 100.0).collect()
}
