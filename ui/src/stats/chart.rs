//! Bar-chart scaling for the activity slide.

/// Weekday bars never drop below this height (percent).
pub const WEEKDAY_FLOOR_PERCENT: f64 = 5.0;
/// Hour bars never drop below this height (percent).
pub const HOUR_FLOOR_PERCENT: f64 = 3.0;

/// Height of each bar as a percentage of the tallest one, never below `floor`.
/// An all-zero (or empty) series renders every bar at `floor`.
pub fn bar_heights(series: &[u64], floor: f64) -> Vec<f64> {
    let max = series.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![floor; series.len()];
    }
    series
        .iter()
        .map(|&value| (value as f64 / max as f64 * 100.0).max(floor))
        .collect()
}

/// Hour axis labels: only every third hour is printed.
pub fn hour_label(hour: usize) -> Option<usize> {
    (hour % 3 == 0).then_some(hour)
}
