//! Sample points for benchmarks.

/// Generates evenly spaced values from `start` to `end`.
///
/// The number of values is `(end - start) / step` rounded to the nearest
/// integer, plus one, and every value is clamped to `end`. An empty vector is
/// returned when the range runs backwards or the step is degenerate.
///
/// # Examples
///
/// ```
/// # use fixed_exp::utils::range::float_range;
/// assert_eq!(float_range(-0.5, 0.5, 0.25), [-0.5, -0.25, 0.0, 0.25, 0.5]);
/// assert!(float_range(1.0, 0.0, 0.5).is_empty());
/// ```
pub fn float_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    let length = ((end - start) / step).round_ties_even() + 1.0;

    if !length.is_finite() || length < 1.0 {
        return Vec::new();
    }

    (0..length as usize)
        .map(|i| (start + i as f64 * step).min(end))
        .collect()
}
