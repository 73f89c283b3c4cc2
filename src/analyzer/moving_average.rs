/// Number of daily closes in the moving average.
pub const MA_WINDOW: usize = 20;

/// Mean of the last `window` values, or `None` when there are fewer than
/// `window` of them.
pub fn trailing_mean(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}
