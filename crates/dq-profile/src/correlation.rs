//! Single-pass Pearson correlation.

/// Pearson correlation coefficient over paired sequences.
///
/// Elements that failed numeric coercion arrive as NaN and contribute a
/// literal `0` to every accumulator rather than being excluded pairwise;
/// under dirty data this biases the coefficient toward zero. Returns `0.0`
/// for empty input or a zero denominator (constant column). The result is
/// not clamped to [-1, 1], so float error may land trivially outside that
/// range.
pub fn correlate(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for i in 0..n {
        let val_x = if x[i].is_nan() { 0.0 } else { x[i] };
        let val_y = if y[i].is_nan() { 0.0 } else { y[i] };
        sum_x += val_x;
        sum_y += val_y;
        sum_xy += val_x * val_y;
        sum_x2 += val_x * val_x;
        sum_y2 += val_y * val_y;
    }
    let n = n as f64;
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
