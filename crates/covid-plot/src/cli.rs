// File: crates/covid-plot/src/cli.rs
// Summary: Command-line surface and the read -> render -> summary driver.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::{Output, PlotConfig, Style, DEFAULT_DPI, DEFAULT_WINDOW};
use crate::error::{PlotError, Result};
use crate::{plot, reader};

#[derive(Parser, Debug)]
#[command(
    name = "covid-plot",
    about = "Plot daily Covid-19 cases and deaths from a day,cases,deaths CSV"
)]
pub struct Cli {
    /// CSV with day, cases and deaths in the first three columns
    #[arg(value_name = "CSV")]
    pub file: Option<PathBuf>,

    /// Draw bars or lines for the daily values
    #[arg(long, value_enum, default_value_t = Style::Bar)]
    pub style: Style,

    /// Rolling-average window in days (0 disables)
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Skip the rolling-average overlay
    #[arg(long, conflicts_with = "window")]
    pub no_smoothing: bool,

    /// Show the chart in a window instead of writing a PNG
    #[arg(long, conflicts_with = "output")]
    pub display: bool,

    /// PNG path (defaults to the input path with a .png extension)
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Resolution of the saved PNG
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: f32,

    /// Color theme (light, dark, solarized-light)
    #[arg(long, default_value = "light")]
    pub theme: String,
}

impl Cli {
    pub fn plot_config(&self) -> PlotConfig {
        let smoothing_window = if self.no_smoothing || self.window == 0 {
            None
        } else {
            Some(self.window)
        };
        let output = if self.display {
            Output::Display
        } else {
            Output::Save(self.output.clone())
        };
        PlotConfig {
            style: self.style,
            smoothing_window,
            output,
            dpi: self.dpi,
            theme: chart_core::theme::find(&self.theme),
            ..PlotConfig::default()
        }
    }
}

/// Run the pipeline and return the summary line for stdout.
pub fn run(cli: &Cli) -> Result<String> {
    let path = cli.file.as_deref().ok_or(PlotError::MissingArgument("CSV"))?;
    let cfg = cli.plot_config();

    let data = reader::read_dataset(path)?;
    info!(rows = data.len(), "loaded {}", path.display());

    plot::render(&data, &cfg, path)?;
    Ok(data.summary_line())
}
