// File: crates/covid-plot/src/config.rs
// Summary: Render configuration: chart style, smoothing window, output target, figure geometry.

use std::path::{Path, PathBuf};

use chart_core::Theme;

pub const DEFAULT_WINDOW: usize = 7;
pub const DEFAULT_DPI: f32 = 300.0;
/// Figure size in inches.
pub const FIGURE_SIZE: (f32, f32) = (6.4, 4.8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    Bar,
    Line,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Interactive window; blocks until closed.
    Display,
    /// PNG file. `None` writes next to the input with a `.png` extension.
    Save(Option<PathBuf>),
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub style: Style,
    pub smoothing_window: Option<usize>,
    pub output: Output,
    pub dpi: f32,
    pub width_in: f32,
    pub height_in: f32,
    pub theme: Theme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            style: Style::Bar,
            smoothing_window: Some(DEFAULT_WINDOW),
            output: Output::Save(None),
            dpi: DEFAULT_DPI,
            width_in: FIGURE_SIZE.0,
            height_in: FIGURE_SIZE.1,
            theme: Theme::light(),
        }
    }
}

impl PlotConfig {
    /// Where a save-mode render lands for `input`; `None` in display mode.
    pub fn output_path(&self, input: &Path) -> Option<PathBuf> {
        match &self.output {
            Output::Display => None,
            Output::Save(Some(p)) => Some(p.clone()),
            Output::Save(None) => Some(image_path_for(input)),
        }
    }
}

/// `data.csv` -> `data.png`; a path without extension just gains one.
pub fn image_path_for(input: &Path) -> PathBuf {
    input.with_extension("png")
}
