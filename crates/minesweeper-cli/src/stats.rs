//! Just enough statistics for benchmark summaries.

/// Arithmetic mean of `values`.
///
/// # Panics
///
/// Panics on an empty slice.
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mean of no samples");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance of `values`.
///
/// # Panics
///
/// Panics on an empty slice.
#[expect(clippy::cast_precision_loss)]
pub fn variance(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation of `values`.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}
