// File: crates/chart-core/src/view.rs
// Summary: Data extents of a chart and helpers to apply them as axis ranges.

use crate::Chart;
use crate::series::SeriesType;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents over every finite point. Bars widen X by half a bar and pull Y to 0.0.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            let half = match s.series_type {
                SeriesType::Bar => s.bar_width * 0.5,
                SeriesType::Line => 0.0,
            };
            let mut any = false;
            for &(x, y) in &s.data_xy {
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x - half);
                x_max = x_max.max(x + half);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
                any = true;
            }
            if any && s.series_type == SeriesType::Bar {
                y_min = y_min.min(0.0);
                y_max = y_max.max(0.0);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Pad the Y range by `frac` of its span on each side; a side sitting exactly on 0 stays put.
    pub fn with_margin(mut self, frac: f64) -> Self {
        let m = (self.y_max - self.y_min) * frac;
        if self.y_min != 0.0 { self.y_min -= m; }
        if self.y_max != 0.0 { self.y_max += m; }
        self
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
