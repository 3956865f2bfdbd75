// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType};
use skia_safe::Color;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_to_bytes<F: FnOnce(&mut Chart)>(build: F) -> Vec<u8> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", -0.5, 9.5);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    build(&mut chart);

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // deterministic
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn sample() -> Vec<(f64, f64)> {
    (0..10).map(|i| (i as f64, 1.0 + (i as f64 * 0.7).sin().abs() * 8.0)).collect()
}

#[test]
fn golden_bars_with_edges() {
    let bytes = render_to_bytes(|c| {
        c.add_series(
            Series::with_data(SeriesType::Bar, sample())
                .with_color(Color::from_rgb(255, 165, 0))
                .with_edge(Color::BLACK),
        )
    });
    write_or_compare("bars.png", &bytes);
}

#[test]
fn golden_line_with_gap() {
    let mut data = sample();
    data[0].1 = f64::NAN;
    data[5].1 = f64::NAN;
    let bytes = render_to_bytes(|c| c.add_series(Series::with_data(SeriesType::Line, data).with_color(Color::RED)));
    write_or_compare("line_gap.png", &bytes);
}
