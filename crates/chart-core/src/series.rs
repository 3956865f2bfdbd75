// File: crates/chart-core/src/series.rs
// Summary: Series model for line and bar data, with per-series styling and legend label.

use anyhow::{bail, Result};
use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    /// Polyline through the points in order; NaN y values break the line.
    Line,
    /// One bar per point, rising from 0.0.
    Bar,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Legend entry; series without one are not listed.
    pub label: Option<String>,
    /// Stroke color for lines, fill color for bars. Falls back to the theme.
    pub color: Option<skia::Color>,
    /// Bar outline color; bars are drawn without an outline when unset.
    pub edge: Option<skia::Color>,
    /// Line width in pixels at scale 1.0.
    pub stroke_width: f32,
    /// Bar width as a fraction of one x unit.
    pub bar_width: f64,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            label: None,
            color: None,
            edge: None,
            stroke_width: 1.5,
            bar_width: 0.8,
        }
    }

    /// Zip parallel x/y columns into a series. Columns must be non-empty and of equal length.
    pub fn try_from_columns(series_type: SeriesType, xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            bail!("column length mismatch: {} x values vs {} y values", xs.len(), ys.len());
        }
        if xs.is_empty() {
            bail!("series has no points");
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::with_data(series_type, data))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_edge(mut self, edge: skia::Color) -> Self {
        self.edge = Some(edge);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Y values in order, NaN included.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(_, y)| y)
    }
}
