// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG file/bytes, RGBA buffer) using Skia CPU raster surfaces.

use anyhow::{bail, Result};
use skia_safe as skia;

use crate::geometry::RectF;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::LinearScale;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, BASE_DPI, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Multiplier for strokes, fonts and insets (1.0 at 100 DPI).
    pub scale: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend. Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: 1.0,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// A figure of `width_in` x `height_in` inches rasterised at `dpi`.
    pub fn for_figure(width_in: f32, height_in: f32, dpi: f32) -> Self {
        let dpi = if dpi.is_finite() && dpi > 0.0 { dpi } else { BASE_DPI };
        Self {
            width: (width_in * dpi).round().max(1.0) as i32,
            height: (height_in * dpi).round().max(1.0) as i32,
            scale: dpi / BASE_DPI,
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn px(&self, v: f32) -> f32 { v * self.scale }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding Y by `margin` of its span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self).with_margin(margin).apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("reading back {}x{} surface failed", opts.width, opts.height);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let area = RectF::plot_area(opts.width, opts.height, &opts.insets.scaled(opts.scale));
        let xs = LinearScale::new(area.left, area.right, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(area.bottom, area.top, self.y_axis.min, self.y_axis.max);
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, self.x_axis.ticks);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, self.y_axis.ticks);

        draw_grid(canvas, opts, &area, &xs, &ys, &x_ticks, &y_ticks);

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(area.left, area.top, area.right, area.bottom),
            None,
            Some(true),
        );
        for s in &self.series {
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, opts, &xs, &ys, s),
                SeriesType::Line => draw_line_series(canvas, opts, &xs, &ys, s),
            }
        }
        canvas.restore();

        draw_axes(canvas, opts, &area);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, opts, &area, &xs, &ys, &x_ticks, &y_ticks, &self.x_axis, &self.y_axis);
            draw_titles(canvas, &shaper, opts, &area, &self.title, &self.x_axis, &self.y_axis);
            if self.show_legend {
                draw_legend(canvas, &shaper, opts, &area, &self.series);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn draw_grid(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    area: &RectF,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let paint = stroke_paint(opts.theme.grid, opts.px(1.0));
    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, area.top), (px, area.bottom), &paint);
    }
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((area.left, py), (area.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, opts: &RenderOptions, area: &RectF) {
    let paint = stroke_paint(opts.theme.axis_line, opts.px(1.2));
    canvas.draw_rect(
        skia::Rect::from_ltrb(area.left, area.top, area.right, area.bottom),
        &paint,
    );
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
) {
    if series.data_xy.is_empty() { return; }

    let fill = fill_paint(series.color.unwrap_or(opts.theme.bar_fill));
    let edge = series.edge.map(|c| stroke_paint(c, opts.px(0.8)));

    // bar width in pixels, never thinner than one device pixel
    let half = (xs.extent(series.bar_width) * 0.5).max(0.5);
    let base = ys.to_px(0.0);

    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() { continue; }
        let cx = xs.to_px(x);
        let top = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(cx - half, top.min(base), cx + half, top.max(base));
        canvas.draw_rect(rect, &fill);
        if let Some(edge) = &edge {
            canvas.draw_rect(rect, edge);
        }
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut segments = 0usize;
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        if pen_down {
            path.line_to(p);
            segments += 1;
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    if segments == 0 { return; }

    let mut stroke = stroke_paint(
        series.color.unwrap_or(opts.theme.line_stroke),
        opts.px(series.stroke_width),
    );
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    area: &RectF,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    x_axis: &Axis,
    y_axis: &Axis,
) {
    let size = opts.px(10.0);
    let color = opts.theme.tick;
    let tick = stroke_paint(opts.theme.axis_line, opts.px(1.0));
    let len = opts.px(4.0);

    let x_step = nice_step(x_axis.span(), x_axis.ticks);
    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, area.bottom), (px, area.bottom + len), &tick);
        shaper.draw_centered(canvas, &format_tick(x, x_step), px, area.bottom + len + size * 1.1, size, color, false);
    }

    let y_step = nice_step(y_axis.span(), y_axis.ticks);
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((area.left - len, py), (area.left, py), &tick);
        shaper.draw_right(canvas, &format_tick(y, y_step), area.left - len - opts.px(3.0), py + size * 0.35, size, color);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    area: &RectF,
    title: &str,
    x_axis: &Axis,
    y_axis: &Axis,
) {
    let label = opts.px(11.0);
    if !title.is_empty() {
        let size = opts.px(13.0);
        shaper.draw_centered(canvas, title, area.center_x(), area.top - opts.px(12.0), size, opts.theme.title, true);
    }
    if !x_axis.label.is_empty() {
        let y = opts.height as f32 - opts.px(14.0);
        shaper.draw_centered(canvas, &x_axis.label, area.center_x(), y, label, opts.theme.axis_label, false);
    }
    if !y_axis.label.is_empty() {
        shaper.draw_vertical(canvas, &y_axis.label, opts.px(14.0), area.center_y(), label, opts.theme.axis_label);
    }
}

/// Legend box in the upper-left of the plot area listing every labelled series.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    area: &RectF,
    series: &[Series],
) {
    let entries: Vec<(&Series, &str)> = series
        .iter()
        .filter_map(|s| s.label.as_deref().map(|l| (s, l)))
        .collect();
    if entries.is_empty() { return; }

    let size = opts.px(10.0);
    let pad = opts.px(6.0);
    let swatch = opts.px(20.0);
    let row = size * 1.5;
    let text_w = entries
        .iter()
        .map(|(_, l)| shaper.measure_width(l, size))
        .fold(0.0f32, f32::max);

    let left = area.left + opts.px(8.0);
    let top = area.top + opts.px(8.0);
    let frame = skia::Rect::from_xywh(
        left,
        top,
        pad * 3.0 + swatch + text_w,
        pad * 2.0 + row * entries.len() as f32,
    );
    canvas.draw_round_rect(frame, opts.px(3.0), opts.px(3.0), &fill_paint(opts.theme.legend_fill));
    canvas.draw_round_rect(frame, opts.px(3.0), opts.px(3.0), &stroke_paint(opts.theme.legend_border, opts.px(0.8)));

    for (i, (s, label)) in entries.iter().enumerate() {
        let mid = top + pad + row * (i as f32 + 0.5);
        let x0 = left + pad;
        match s.series_type {
            SeriesType::Bar => {
                let r = skia::Rect::from_ltrb(x0, mid - size * 0.35, x0 + swatch, mid + size * 0.35);
                canvas.draw_rect(r, &fill_paint(s.color.unwrap_or(opts.theme.bar_fill)));
                if let Some(edge) = s.edge {
                    canvas.draw_rect(r, &stroke_paint(edge, opts.px(0.8)));
                }
            }
            SeriesType::Line => {
                let p = stroke_paint(s.color.unwrap_or(opts.theme.line_stroke), opts.px(s.stroke_width));
                canvas.draw_line((x0, mid), (x0 + swatch, mid), &p);
            }
        }
        shaper.draw_left(canvas, label, x0 + swatch + pad, mid + size * 0.35, size, opts.theme.axis_label);
    }
}
