//! Text rendering of oscillator output as horizontal bars.

use crate::math::clamp_to_unit;

const FILLED: char = '█';
const EMPTY: char = '·';

/// A bar `width` cells wide, filled in proportion to `value` in `[0, 1]`.
///
/// Values outside the unit range are clamped; NaN renders empty.
pub fn render_bar(value: f64, width: usize) -> String {
    let filled = if value.is_nan() {
        0
    } else {
        (clamp_to_unit(value) * width as f64).round() as usize
    };
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

/// One line of a sampled trace: time, value, and bar.
pub fn format_sample(time_ms: f64, value: f64, width: usize) -> String {
    format!("{time_ms:>10.1} ms  {value:>6.3}  {}", render_bar(value, width))
}

/// Format every `(time_ms, value)` pair of a series.
pub fn render_trace(series: &[(f64, f64)], width: usize) -> Vec<String> {
    series
        .iter()
        .map(|&(t, v)| format_sample(t, v, width))
        .collect()
}
