// File: crates/covid-plot/src/plot.rs
// Summary: Builds the cases/deaths chart from a dataset and sends it to a window or a PNG file.

use std::path::{Path, PathBuf};

use chart_core::{
    Axis, Chart, Indicator, IndicatorParams, RenderOptions, Series, SeriesType, SmaIndicator,
};
use chart_window::WindowOptions;
use skia_safe::Color;
use tracing::{debug, info};

use crate::config::{Output, PlotConfig, Style};
use crate::error::{PlotError, Result};
use crate::reader::Dataset;

pub const TITLE: &str = "Covid-19 Cases and Deaths";
pub const X_LABEL: &str = "Days since first reported case";
pub const Y_LABEL: &str = "Daily Reported Cases & Deaths";

const ORANGE: Color = Color::new(0xFFFF_A500);
const RED: Color = Color::RED;
const BLACK: Color = Color::BLACK;
/// Rolling-average overlay line width, at scale 1.0.
const OVERLAY_WIDTH: f32 = 2.0;

/// Assemble the chart: primary cases/deaths series (legend "Cases"/"Deaths") plus,
/// when smoothing is on, one unlabelled moving-average line per column.
pub fn build_chart(data: &Dataset, cfg: &PlotConfig) -> Result<Chart> {
    let n = data.days.len();
    if data.cases.len() != n || data.deaths.len() != n {
        return Err(PlotError::render(format!(
            "column length mismatch: {} days, {} cases, {} deaths",
            n,
            data.cases.len(),
            data.deaths.len()
        )));
    }
    if n == 0 {
        return Err(PlotError::render("nothing to plot: dataset has no rows"));
    }

    let xs = to_f64(&data.days);
    let (kind, cases_color, deaths_color) = match cfg.style {
        Style::Bar => (SeriesType::Bar, ORANGE, BLACK),
        Style::Line => (SeriesType::Line, RED, BLACK),
    };

    let mut cases = Series::try_from_columns(kind, &xs, &to_f64(&data.cases))
        .map_err(PlotError::Render)?
        .with_label("Cases")
        .with_color(cases_color);
    if cfg.style == Style::Bar {
        cases = cases.with_edge(BLACK);
    }
    let deaths = Series::try_from_columns(kind, &xs, &to_f64(&data.deaths))
        .map_err(PlotError::Render)?
        .with_label("Deaths")
        .with_color(deaths_color);

    let overlays = match cfg.smoothing_window {
        Some(period) if period > 0 => {
            let params = IndicatorParams { period };
            debug!(period, "computing rolling averages");
            vec![
                SmaIndicator.compute(&cases, &params).with_color(BLACK).with_stroke_width(OVERLAY_WIDTH),
                SmaIndicator.compute(&deaths, &params).with_color(RED).with_stroke_width(OVERLAY_WIDTH),
            ]
        }
        _ => Vec::new(),
    };

    let mut chart = Chart::new().with_title(TITLE);
    chart.x_axis = Axis::default_x().with_label(X_LABEL);
    chart.y_axis = Axis::default_y().with_label(Y_LABEL);
    chart.add_series(cases);
    chart.add_series(deaths);
    for s in overlays {
        chart.add_series(s);
    }
    chart.autoscale_axes(0.05);
    Ok(chart)
}

/// Build the chart and emit it. Returns the written image path in save mode.
pub fn render(data: &Dataset, cfg: &PlotConfig, input: &Path) -> Result<Option<PathBuf>> {
    let chart = build_chart(data, cfg)?;

    match cfg.output_path(input) {
        None => {
            let opts = WindowOptions {
                title: TITLE.to_string(),
                render: RenderOptions::default().with_theme(cfg.theme),
                ..WindowOptions::default()
            };
            info!("showing chart window; close it to continue");
            chart_window::show(&chart, &opts).map_err(PlotError::Window)?;
            Ok(None)
        }
        Some(path) => {
            let opts = RenderOptions::for_figure(cfg.width_in, cfg.height_in, cfg.dpi)
                .with_theme(cfg.theme);
            chart.render_to_png(&opts, &path).map_err(PlotError::Render)?;
            info!(path = %path.display(), width = opts.width, height = opts.height, "wrote chart");
            Ok(Some(path))
        }
    }
}

fn to_f64(v: &[i64]) -> Vec<f64> {
    v.iter().map(|&x| x as f64).collect()
}

// Display mode would open a window, so only the save path is exercised here.
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset {
            header: vec!["day".into(), "cases".into(), "deaths".into()],
            days: (0..10).collect(),
            cases: vec![1, 3, 2, 8, 5, 9, 12, 7, 15, 11],
            deaths: vec![0, 0, 1, 0, 2, 1, 3, 2, 4, 3],
        }
    }

    #[test]
    fn bar_chart_with_smoothing_has_four_series() {
        let chart = build_chart(&sample(), &PlotConfig::default()).unwrap();
        assert_eq!(chart.title, TITLE);
        assert_eq!(chart.x_axis.label, X_LABEL);
        assert_eq!(chart.y_axis.label, Y_LABEL);
        assert_eq!(chart.series.len(), 4);

        let labels: Vec<_> = chart.series.iter().map(|s| s.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("Cases"), Some("Deaths"), None, None]);

        let cases = &chart.series[0];
        assert_eq!(cases.series_type, SeriesType::Bar);
        assert_eq!(cases.color, Some(ORANGE));
        assert_eq!(cases.edge, Some(BLACK));
        assert_eq!(chart.series[1].color, Some(BLACK));
        assert_eq!(chart.series[2].color, Some(BLACK));
        assert_eq!(chart.series[3].color, Some(RED));
        assert!(chart.series[2..].iter().all(|s| s.stroke_width == OVERLAY_WIDTH));
        assert!(chart.series[..2].iter().all(|s| s.stroke_width != OVERLAY_WIDTH));

        // overlay has the input length with a NaN prefix of window-1
        let avg = &chart.series[2];
        assert_eq!(avg.series_type, SeriesType::Line);
        assert_eq!(avg.data_xy.len(), 10);
        assert!(avg.data_xy[..6].iter().all(|p| p.1.is_nan()));
        let want = [1.0, 3.0, 2.0, 8.0, 5.0, 9.0, 12.0].iter().sum::<f64>() / 7.0;
        assert!((avg.data_xy[6].1 - want).abs() < 1e-9);
    }

    #[test]
    fn line_chart_without_smoothing() {
        let cfg = PlotConfig { style: Style::Line, smoothing_window: None, ..PlotConfig::default() };
        let chart = build_chart(&sample(), &cfg).unwrap();
        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.series_type == SeriesType::Line));
        assert_eq!(chart.series[0].color, Some(RED));
        assert_eq!(chart.series[0].edge, None);
        assert_eq!(chart.series[1].color, Some(BLACK));
    }

    #[test]
    fn zero_window_disables_smoothing() {
        let cfg = PlotConfig { smoothing_window: Some(0), ..PlotConfig::default() };
        assert_eq!(build_chart(&sample(), &cfg).unwrap().series.len(), 2);
    }

    #[test]
    fn mismatched_or_empty_columns_are_render_errors() {
        let mut d = sample();
        d.deaths.pop();
        assert!(matches!(build_chart(&d, &PlotConfig::default()), Err(PlotError::Render(_))));
        assert!(matches!(
            build_chart(&Dataset::default(), &PlotConfig::default()),
            Err(PlotError::Render(_))
        ));
    }

    #[test]
    fn save_writes_png_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("uk.csv");
        let cfg = PlotConfig { dpi: 100.0, ..PlotConfig::default() };
        let out = render(&sample(), &cfg, &input).unwrap();
        let path = out.expect("save mode returns a path");
        assert_eq!(path, dir.path().join("uk.png"));

        let img = image::open(&path).expect("decode written png");
        assert_eq!((img.width(), img.height()), (640, 480));
    }
}
