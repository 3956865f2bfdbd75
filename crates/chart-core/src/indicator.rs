// File: crates/chart-core/src/indicator.rs
// Summary: Indicator trait and the trailing simple-moving-average used for smoothing overlays.

use crate::series::{Series, SeriesType};

#[derive(Clone, Copy, Debug)]
pub struct IndicatorParams {
    pub period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self { Self { period: 7 } }
}

/// Indicator transforms input series into a derived series (typically a Line series).
pub trait Indicator {
    fn compute(&self, input: &Series, params: &IndicatorParams) -> Series;
}

/// Trailing mean over `window` samples. Output has the input's length; positions
/// before the window fills (`i < window - 1`) are NaN. A zero window yields all NaN.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 { return out; }
    let w = window as f64;
    let mut sum = 0.0f64;
    for i in 0..values.len() {
        sum += values[i];
        if i >= window { sum -= values[i - window]; }
        if i + 1 >= window {
            out[i] = sum / w;
        }
    }
    out
}

/// Simple moving average of a series' y values, kept aligned to the input x values.
pub struct SmaIndicator;

impl Indicator for SmaIndicator {
    fn compute(&self, input: &Series, params: &IndicatorParams) -> Series {
        let ys: Vec<f64> = input.ys().collect();
        let avg = rolling_mean(&ys, params.period);
        let data = input.data_xy.iter().zip(avg).map(|(&(x, _), y)| (x, y)).collect();
        Series::with_data(SeriesType::Line, data)
    }
}
